//! RGB to XYZ matrix derivation.
//!
//! Standard primaries-plus-white solve. With `P` the chromaticity matrix
//! whose columns are `(x, y, z)` of each primary and `W` the white point
//! XYZ normalized to `Y = 1`:
//!
//! ```text
//! S = P^-1 * W
//! M = P * diag(S)        so that M * (1, 1, 1) = W
//! ```

use crate::error::{ColorimetryError, ColorimetryResult};
use dispgen_core::{ChromaticAdaptation, Chromaticity, PrimarySet};
use dispgen_math::{BRADFORD, CAT02, Mat3, VON_KRIES, Vec3, XYZ_SCALING, adapt_matrix};
use tracing::trace;

/// `|det P|` below which the primaries count as collinear.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Smallest admissible per-primary scale factor. A white on or beyond a
/// gamut edge drives one factor to zero or below.
pub const SCALE_EPSILON: f64 = 1e-9;

fn xyz_column(c: Chromaticity) -> Vec3 {
    Vec3::new(c.x, c.y, c.z())
}

/// White point XYZ with `Y = 1`.
pub fn white_xyz(white: Chromaticity) -> ColorimetryResult<Vec3> {
    white
        .to_xyz()
        .filter(|_| white.x.is_finite() && white.y > 0.0)
        .map(Vec3::from_array)
        .ok_or(ColorimetryError::InvalidWhitePoint {
            x: white.x,
            y: white.y,
        })
}

/// Chromaticity matrix `P`: one primary per column.
pub fn chromaticity_matrix(primaries: &PrimarySet) -> Mat3 {
    Mat3::from_col_vecs(
        xyz_column(primaries.red),
        xyz_column(primaries.green),
        xyz_column(primaries.blue),
    )
}

/// Derives the RGB to XYZ matrix for `primaries` under `white`.
///
/// # Errors
///
/// - [`ColorimetryError::InvalidWhitePoint`] when `white.y <= 0`
/// - [`ColorimetryError::DegenerateGamut`] when the primaries are collinear
/// - [`ColorimetryError::WhiteOutsideGamut`] when the white lies outside
///   the triangle or on one of its edges
///
/// # Example
///
/// ```rust
/// use dispgen_core::Chromaticity;
/// use dispgen_primaries::{rgb_to_xyz_matrix, REC709};
///
/// let m = rgb_to_xyz_matrix(&REC709, Chromaticity::D65).unwrap();
/// assert!((m.m[1][0] - 0.2126).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &PrimarySet, white: Chromaticity) -> ColorimetryResult<Mat3> {
    let w = white_xyz(white)?;
    let p = chromaticity_matrix(primaries);
    let det = p.determinant();
    if !det.is_finite() || det.abs() < DEGENERATE_EPSILON {
        return Err(ColorimetryError::DegenerateGamut { determinant: det });
    }
    let p_inv = p.inverse().ok_or(ColorimetryError::DegenerateGamut { determinant: det })?;
    let s = p_inv * w;
    if s.min_element() < SCALE_EPSILON {
        return Err(ColorimetryError::WhiteOutsideGamut {
            x: white.x,
            y: white.y,
            sr: s.x,
            sg: s.y,
            sb: s.z,
        });
    }
    let m = p * Mat3::diagonal(s.x, s.y, s.z);
    trace!(det, sr = s.x, sg = s.y, sb = s.z, "matrix::rgb_to_xyz");
    Ok(m)
}

/// Inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &PrimarySet, white: Chromaticity) -> ColorimetryResult<Mat3> {
    let m = rgb_to_xyz_matrix(primaries, white)?;
    m.inverse().ok_or(ColorimetryError::DegenerateGamut {
        determinant: m.determinant(),
    })
}

/// Cone response matrix for an adaptation method, `None` for no adaptation.
pub fn adaptation_cone_matrix(method: ChromaticAdaptation) -> Option<Mat3> {
    match method {
        ChromaticAdaptation::None => None,
        ChromaticAdaptation::Bradford => Some(BRADFORD),
        ChromaticAdaptation::Cat02 => Some(CAT02),
        ChromaticAdaptation::VonKries => Some(VON_KRIES),
        ChromaticAdaptation::XyzScaling => Some(XYZ_SCALING),
    }
}

/// Matrix from the CIE XYZ D65 display reference to display RGB.
///
/// Without adaptation the display is encoded absolutely: reference XYZ
/// goes straight through the inverse display matrix. With adaptation the
/// reference white is first mapped onto the display white, so D65 input
/// lands on display RGB (1, 1, 1).
pub fn display_matrix(
    primaries: &PrimarySet,
    white: Chromaticity,
    adaptation: ChromaticAdaptation,
) -> ColorimetryResult<Mat3> {
    let to_rgb = xyz_to_rgb_matrix(primaries, white)?;
    let Some(cone) = adaptation_cone_matrix(adaptation) else {
        return Ok(to_rgb);
    };
    let src = white_xyz(Chromaticity::D65)?;
    let dst = white_xyz(white)?;
    let cat = adapt_matrix(cone, src, dst).ok_or(ColorimetryError::InvalidWhitePoint {
        x: white.x,
        y: white.y,
    })?;
    Ok(to_rgb * cat)
}
