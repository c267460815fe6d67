//! Base config resolution.
//!
//! The assembler only sees [`BaseConfigProvider`], so tests can swap in
//! a closure:
//!
//! ```
//! use dispgen_core::BaseConfigSelector;
//! use dispgen_ocio::{BaseConfigProvider, Config, OcioResult};
//!
//! let fake = |sel: &BaseConfigSelector| -> OcioResult<Config> { Ok(Config::new(sel.key())) };
//! let config = fake.resolve(&BaseConfigSelector::default()).unwrap();
//! assert_eq!(config.name(), "studio-config-v2.1.0_aces-v1.3_ocio-v2.3");
//! ```

use crate::builtin;
use crate::config::Config;
use crate::error::{OcioError, OcioResult};
use dispgen_core::{BaseConfigSelector, OCIO_SCHEME};
use tracing::debug;

/// Resolves a selector into a base config.
pub trait BaseConfigProvider {
    /// Returns a fresh copy of the selected config, or
    /// [`OcioError::UnknownSelector`].
    fn resolve(&self, selector: &BaseConfigSelector) -> OcioResult<Config>;
}

impl<F> BaseConfigProvider for F
where
    F: Fn(&BaseConfigSelector) -> OcioResult<Config>,
{
    fn resolve(&self, selector: &BaseConfigSelector) -> OcioResult<Config> {
        self(selector)
    }
}

/// Provider backed by the configs in [`builtin`].
#[derive(Debug, Clone)]
pub struct BuiltinProvider {
    entries: Vec<(String, fn() -> Config)>,
}

impl Default for BuiltinProvider {
    fn default() -> Self {
        let key = |kind: &str| {
            BaseConfigSelector {
                kind: kind.to_string(),
                ..BaseConfigSelector::default()
            }
            .key()
        };
        Self {
            entries: vec![
                (key("studio"), builtin::studio_config as fn() -> Config),
                (key("aces"), builtin::aces_config as fn() -> Config),
            ],
        }
    }
}

impl BuiltinProvider {
    /// Provider with the studio and ACES configs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys this provider resolves, without scheme.
    pub fn known_keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Resolves a raw key, with or without the `ocio://` scheme.
    pub fn resolve_key(&self, key: &str) -> OcioResult<Config> {
        let bare = key.trim().strip_prefix(OCIO_SCHEME).unwrap_or(key.trim());
        match self.entries.iter().find(|(k, _)| k == bare) {
            Some((k, build)) => {
                debug!(key = %k, "resolved built-in base config");
                Ok(build())
            }
            None => Err(OcioError::UnknownSelector {
                key: bare.to_string(),
                known: self.known_keys(),
            }),
        }
    }
}

impl BaseConfigProvider for BuiltinProvider {
    fn resolve(&self, selector: &BaseConfigSelector) -> OcioResult<Config> {
        self.resolve_key(&selector.key())
    }
}
