//! Transfer model construction errors.

use thiserror::Error;

/// Result alias for transfer models.
pub type TransferResult<T> = Result<T, TransferError>;

/// A model parameter is unusable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    /// Peak luminance must be finite and positive.
    #[error("invalid peak luminance {peak} cd/m² for {curve}")]
    InvalidPeak {
        /// Curve being built.
        curve: &'static str,
        /// Offending value.
        peak: f64,
    },

    /// Gamma exponent must be finite and positive.
    #[error("invalid gamma exponent {value}")]
    InvalidGamma {
        /// Offending value.
        value: f64,
    },
}
