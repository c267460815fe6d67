//! Errors raised while building the data model from loosely typed input.
//!
//! Every variant names the offending value so the caller can report it
//! verbatim.

use thiserror::Error;

/// Result alias for data model construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Gamut mapping strategy name is not one of the eight known strategies.
    #[error("unknown gamut mapping strategy '{name}' (known: {})", known.join(", "))]
    UnknownGamutStrategy {
        /// Name as given.
        name: String,
        /// Accepted names.
        known: Vec<&'static str>,
    },

    /// EOTF tag is not PQ, HLG or GAMMA.
    #[error("unknown EOTF type '{name}' (expected PQ, HLG or GAMMA)")]
    UnknownEotf {
        /// Tag as given.
        name: String,
    },

    /// EOTF parameter missing or outside the representable range.
    #[error("invalid EOTF parameter: {reason}")]
    InvalidEotfParameter {
        /// What is wrong with it.
        reason: String,
    },

    /// Surround category is not dark, dim or average.
    #[error("unknown surround '{name}' (expected dark, dim or average)")]
    UnknownSurround {
        /// Name as given.
        name: String,
    },

    /// Content hint is not one of the known hints.
    #[error("unknown content hint '{name}' (expected photographic, graphics, specular or auto)")]
    UnknownContentHint {
        /// Name as given.
        name: String,
    },

    /// Chromatic adaptation method is not recognized.
    #[error("unknown chromatic adaptation '{name}' (expected none, bradford, cat02, von_kries or xyz_scaling)")]
    UnknownAdaptation {
        /// Name as given.
        name: String,
    },

    /// A required field was absent.
    #[error("missing field: {field}")]
    MissingField {
        /// Dotted path of the field.
        field: String,
    },
}

/// Normalizes a user-supplied enumeration name: trims, lowercases and
/// folds `-` and spaces to `_`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
