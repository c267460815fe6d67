//! Gamut area coverage in CIE xy.
//!
//! Coverage is the area ratio of the display triangle to a reference
//! triangle, in percent. It is not an intersection: a gamut wider than
//! the reference reports more than 100%.

use crate::ReferenceGamut;
use dispgen_core::PrimarySet;

/// Unsigned area of the xy triangle (shoelace formula).
pub fn gamut_area(primaries: &PrimarySet) -> f64 {
    let [r, g, b] = primaries.to_array();
    0.5 * (r.x * (g.y - b.y) + g.x * (b.y - r.y) + b.x * (r.y - g.y)).abs()
}

/// Area of `primaries` relative to `reference`, as a percentage.
///
/// Returns `None` if either triangle is degenerate or non-finite.
///
/// ```rust
/// use dispgen_primaries::{gamut_coverage, ReferenceGamut, REC2020};
///
/// let pct = gamut_coverage(&REC2020, ReferenceGamut::Rec709).unwrap();
/// assert!((pct - 189.08).abs() < 0.01);
/// ```
pub fn gamut_coverage(primaries: &PrimarySet, reference: ReferenceGamut) -> Option<f64> {
    let area = gamut_area(primaries);
    let ref_area = gamut_area(&reference.primaries());
    if !area.is_finite() || area < 1e-12 || ref_area < 1e-12 {
        return None;
    }
    Some(100.0 * area / ref_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{P3, REC709};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_self_coverage() {
        assert_abs_diff_eq!(
            gamut_coverage(&REC709, ReferenceGamut::Rec709).unwrap(),
            100.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_p3_vs_709() {
        let pct = gamut_coverage(&P3, ReferenceGamut::Rec709).unwrap();
        assert_abs_diff_eq!(pct, 135.65, epsilon = 0.01);
    }

    #[test]
    fn test_area_order_independent() {
        let swapped = PrimarySet {
            red: REC709.blue,
            green: REC709.green,
            blue: REC709.red,
        };
        assert_abs_diff_eq!(gamut_area(&swapped), gamut_area(&REC709), epsilon = 1e-15);
        assert_abs_diff_eq!(gamut_area(&REC709), 0.11205, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_has_no_coverage() {
        let line = PrimarySet::new([0.2, 0.2], [0.4, 0.4], [0.6, 0.6]);
        assert!(gamut_coverage(&line, ReferenceGamut::Rec709).is_none());
    }
}
