//! Error types for profile generation.

use dispgen_ocio::OcioError;
use dispgen_primaries::ColorimetryError;
use dispgen_transfer::TransferError;
use dispgen_validate::{Report, ValidateError};
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for profile generation.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that stop a generation run.
///
/// None of these are retried: every failure comes from input data.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Input record could not be turned into a characterization.
    #[error(transparent)]
    Core(#[from] dispgen_core::Error),

    /// Primaries or white point cannot produce a display matrix.
    #[error(transparent)]
    Colorimetry(#[from] ColorimetryError),

    /// Transfer curve parameters are unusable.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// Base config selector did not match any config the provider knows.
    #[error("base config '{key}' could not be resolved (known: {})", known.join(", "))]
    BaseConfigUnresolved {
        /// Key that was looked up.
        key: String,
        /// Keys the provider can resolve.
        known: Vec<String>,
    },

    /// Strict validation produced at least one error.
    #[error("validation rejected the display ({} error(s))", report.errors().count())]
    ValidationRejected {
        /// Full report, warnings included.
        report: Report,
    },

    /// Merging into or writing the output document failed.
    #[error("output document: {0}")]
    Document(OcioError),

    /// Validation rule file could not be loaded.
    #[error(transparent)]
    Rules(#[from] ValidateError),

    /// Display config file could not be read.
    #[error("cannot read display config '{}': {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Display config YAML is malformed or missing required keys.
    #[error("display config YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<OcioError> for ProfileError {
    fn from(err: OcioError) -> Self {
        match err {
            OcioError::UnknownSelector { key, known } => Self::BaseConfigUnresolved { key, known },
            other => Self::Document(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selector_maps_to_unresolved() {
        let err: ProfileError = OcioError::UnknownSelector {
            key: "bogus-config".into(),
            known: vec!["a".into(), "b".into()],
        }
        .into();
        match &err {
            ProfileError::BaseConfigUnresolved { key, known } => {
                assert_eq!(key, "bogus-config");
                assert_eq!(known.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.to_string().contains("known: a, b"));
    }

    #[test]
    fn test_other_ocio_errors_are_document_errors() {
        let err: ProfileError = OcioError::DuplicateDisplay { name: "X".into() }.into();
        assert!(matches!(err, ProfileError::Document(_)));
    }
}
