//! Colorimetry errors.

use thiserror::Error;

/// Result alias for colorimetry operations.
pub type ColorimetryResult<T> = Result<T, ColorimetryError>;

/// Failures of the matrix solve and white point analysis.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorimetryError {
    /// Primaries are collinear so the chromaticity system cannot be inverted.
    #[error("degenerate gamut: primary chromaticity determinant {determinant:.3e} is too close to zero")]
    DegenerateGamut {
        /// Determinant of the chromaticity matrix.
        determinant: f64,
    },

    /// White point lies outside (or on an edge of) the primaries triangle,
    /// so at least one primary would need a non-positive scale.
    #[error(
        "white point ({x}, {y}) lies outside the primaries gamut: channel scales ({sr:.4}, {sg:.4}, {sb:.4})"
    )]
    WhiteOutsideGamut {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
        /// Red scale.
        sr: f64,
        /// Green scale.
        sg: f64,
        /// Blue scale.
        sb: f64,
    },

    /// White point y is zero or non-finite.
    #[error("invalid white point ({x}, {y}): cannot normalize to Y = 1")]
    InvalidWhitePoint {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
    },

    /// Chromaticity is outside the domain of the CIE 1960 projection or
    /// the locus search range.
    #[error("cannot estimate CCT for ({x}, {y}): {reason}")]
    CctOutOfRange {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
        /// Why the estimate failed.
        reason: String,
    },
}
