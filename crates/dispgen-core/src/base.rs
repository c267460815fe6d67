//! Base OCIO config selector.
//!
//! The selector combines deterministically into the key the config
//! provider looks up:
//!
//! ```rust
//! use dispgen_core::BaseConfigSelector;
//!
//! let sel = BaseConfigSelector::default();
//! assert_eq!(sel.key(), "studio-config-v2.1.0_aces-v1.3_ocio-v2.3");
//! assert_eq!(sel.uri(), "ocio://studio-config-v2.1.0_aces-v1.3_ocio-v2.3");
//! ```

use std::fmt;

/// URI scheme prefixed to built-in config keys.
pub const OCIO_SCHEME: &str = "ocio://";

/// Which base config the display colorspaces are merged into.
///
/// `kind` is kept as given (`studio`, `aces`, `custom`, or anything
/// else) so that an unknown kind still yields a key and fails at
/// resolution with that key in the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseConfigSelector {
    /// Config family: `studio`, `aces` or `custom`.
    pub kind: String,
    /// Config release, e.g. `v2.1.0`.
    pub config_version: String,
    /// ACES release, e.g. `v1.3`.
    pub aces_version: String,
    /// OCIO release, e.g. `v2.3`.
    pub ocio_version: String,
}

impl BaseConfigSelector {
    /// Default family.
    pub const DEFAULT_KIND: &'static str = "studio";
    /// Default config release.
    pub const DEFAULT_CONFIG_VERSION: &'static str = "v2.1.0";
    /// Default ACES release.
    pub const DEFAULT_ACES_VERSION: &'static str = "v1.3";
    /// Default OCIO release.
    pub const DEFAULT_OCIO_VERSION: &'static str = "v2.3";

    /// Creates a selector.
    pub fn new(
        kind: impl Into<String>,
        config_version: impl Into<String>,
        aces_version: impl Into<String>,
        ocio_version: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            config_version: config_version.into(),
            aces_version: aces_version.into(),
            ocio_version: ocio_version.into(),
        }
    }

    /// `"{type}-config-{config_version}_aces-{aces_version}_ocio-{ocio_version}"`.
    pub fn key(&self) -> String {
        format!(
            "{}-config-{}_aces-{}_ocio-{}",
            self.kind, self.config_version, self.aces_version, self.ocio_version
        )
    }

    /// The key with the `ocio://` scheme.
    pub fn uri(&self) -> String {
        format!("{OCIO_SCHEME}{}", self.key())
    }
}

impl Default for BaseConfigSelector {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_KIND,
            Self::DEFAULT_CONFIG_VERSION,
            Self::DEFAULT_ACES_VERSION,
            Self::DEFAULT_OCIO_VERSION,
        )
    }
}

impl fmt::Display for BaseConfigSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}
