//! Error types for document assembly, base config resolution and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for document operations.
pub type OcioResult<T> = Result<T, OcioError>;

/// Errors that can occur while building or writing a config.
#[derive(Debug, Error)]
pub enum OcioError {
    /// I/O error writing the document.
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Tag pattern failed to compile.
    #[error("tag pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Base config selector not known to the provider.
    #[error("unknown base config '{key}' (known: {})", known.join(", "))]
    UnknownSelector {
        /// Key that was looked up.
        key: String,
        /// Keys the provider can resolve.
        known: Vec<String>,
    },

    /// Color space name or alias already defined.
    #[error("color space already defined: {name}")]
    DuplicateColorSpace {
        /// Conflicting name.
        name: String,
    },

    /// Display already defined.
    #[error("display already defined: {name}")]
    DuplicateDisplay {
        /// Conflicting name.
        name: String,
    },

    /// Role, view or transform references something undefined.
    #[error("color space not found: {name}")]
    ColorSpaceNotFound {
        /// Missing name.
        name: String,
    },
}
