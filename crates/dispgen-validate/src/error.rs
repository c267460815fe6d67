//! Rule set loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for rule set loading.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Failures while reading a rule set file.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// File exists but could not be read.
    #[error("cannot read rule set '{}': {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or shape error.
    #[error("rule set YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Override for a known rule has an unusable value.
    #[error("invalid override for rule '{rule}': {reason}")]
    InvalidRule {
        /// Rule name.
        rule: String,
        /// What is wrong.
        reason: String,
    },
}
