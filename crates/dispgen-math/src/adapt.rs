//! Chromatic adaptation transforms (CAT).
//!
//! A CAT maps XYZ measured under one white to the XYZ that appears
//! equivalent under another. The display generator uses it when the
//! caller asks to adapt a display white to the D65 display reference
//! instead of encoding it absolutely.
//!
//! ```rust
//! use dispgen_math::{adapt_matrix, BRADFORD, D50, D65};
//!
//! let m = adapt_matrix(BRADFORD, D65, D50).unwrap();
//! let w = m * D65;
//! assert!((w.x - D50.x).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Illuminants (XYZ, Y = 1)
// ============================================================================

/// CIE D65, the display reference white.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE D50.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE D60 (ACES white).
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// DCI theatrical white.
pub const DCI_WHITE: Vec3 = Vec3::new(0.89459, 1.0, 0.95441);

// ============================================================================
// Cone response matrices
// ============================================================================

/// Bradford (Lam 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// CAT02 (CIECAM02).
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// von Kries, Hunt-Pointer-Estevez cone space.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Plain XYZ scaling.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Adaptation matrix `M^-1 * diag(dst / src) * M` from `src_white` to
/// `dst_white`, both given as XYZ.
///
/// Returns `None` if `method` is singular or a white point has a zero
/// cone response.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Option<Mat3> {
    let method_inv = method.inverse()?;
    let src = method * src_white;
    let dst = method * dst_white;
    if src.x == 0.0 || src.y == 0.0 || src.z == 0.0 {
        return None;
    }
    let gain = Mat3::diagonal(dst.x / src.x, dst.y / src.y, dst.z / src.z);
    Some(method_inv * gain * method)
}
