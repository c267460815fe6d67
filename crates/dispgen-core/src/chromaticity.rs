//! CIE xy chromaticities, primary sets and white points.
//!
//! Values are stored as measured. Range checks (`0 <= x, y <= 1`,
//! `x + y <= 1`) belong to validation, so out-of-range measurements can
//! still be represented and reported.

use std::fmt;

/// A CIE 1931 xy chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticity {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
}

impl Chromaticity {
    /// D65 as used by Rec.709, Rec.2020 and Display P3.
    pub const D65: Self = Self::new(0.3127, 0.3290);

    /// DCI theatrical white.
    pub const DCI: Self = Self::new(0.314, 0.351);

    /// Creates a chromaticity.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `1 - x - y`.
    #[inline]
    pub fn z(self) -> f64 {
        1.0 - self.x - self.y
    }

    /// XYZ tristimulus with Y normalized to 1.
    ///
    /// Returns `None` when `y` is zero or not finite.
    pub fn to_xyz(self) -> Option<[f64; 3]> {
        if !self.y.is_finite() || self.y.abs() < 1e-12 {
            return None;
        }
        Some([self.x / self.y, 1.0, self.z() / self.y])
    }

    /// CIE 1960 UCS (u, v).
    ///
    /// Returns `None` at the degenerate denominator.
    pub fn to_uv(self) -> Option<(f64, f64)> {
        let d = -2.0 * self.x + 12.0 * self.y + 3.0;
        if d.abs() < 1e-12 {
            return None;
        }
        Some((4.0 * self.x / d, 6.0 * self.y / d))
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Chromaticity {
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl fmt::Display for Chromaticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Red, green and blue primaries of a display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimarySet {
    /// Red primary.
    pub red: Chromaticity,
    /// Green primary.
    pub green: Chromaticity,
    /// Blue primary.
    pub blue: Chromaticity,
}

impl PrimarySet {
    /// Creates a primary set from three `[x, y]` pairs.
    pub const fn new(red: [f64; 2], green: [f64; 2], blue: [f64; 2]) -> Self {
        Self {
            red: Chromaticity::new(red[0], red[1]),
            green: Chromaticity::new(green[0], green[1]),
            blue: Chromaticity::new(blue[0], blue[1]),
        }
    }

    /// Primaries in R, G, B order, paired with their names.
    pub fn named(&self) -> [(&'static str, Chromaticity); 3] {
        [("red", self.red), ("green", self.green), ("blue", self.blue)]
    }

    /// Primaries in R, G, B order.
    pub fn to_array(&self) -> [Chromaticity; 3] {
        [self.red, self.green, self.blue]
    }
}

/// A display white point with its derived temperature metrics.
///
/// `cct` and `duv` are `None` until derived, or when the chromaticity is
/// too far from the Planckian locus to produce a meaningful estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Measured chromaticity.
    pub xy: Chromaticity,
    /// Correlated color temperature in Kelvin.
    pub cct: Option<f64>,
    /// Signed distance from the Planckian locus in CIE 1960 UCS.
    pub duv: Option<f64>,
}

impl WhitePoint {
    /// White point without derived metrics.
    pub const fn new(xy: Chromaticity) -> Self {
        Self {
            xy,
            cct: None,
            duv: None,
        }
    }

    /// Attaches derived CCT and duv.
    pub fn with_metrics(mut self, cct: f64, duv: f64) -> Self {
        self.cct = Some(cct);
        self.duv = Some(duv);
        self
    }
}

impl From<Chromaticity> for WhitePoint {
    fn from(xy: Chromaticity) -> Self {
        Self::new(xy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d65_xyz() {
        let xyz = Chromaticity::D65.to_xyz().unwrap();
        assert_abs_diff_eq!(xyz[0], 0.95046, epsilon = 1e-4);
        assert_eq!(xyz[1], 1.0);
        assert_abs_diff_eq!(xyz[2], 1.08906, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_y_has_no_xyz() {
        assert!(Chromaticity::new(0.3, 0.0).to_xyz().is_none());
    }

    #[test]
    fn test_d65_uv() {
        let (u, v) = Chromaticity::D65.to_uv().unwrap();
        assert_abs_diff_eq!(u, 0.19783, epsilon = 1e-4);
        assert_abs_diff_eq!(v, 0.31221, epsilon = 1e-4);
    }

    #[test]
    fn test_white_point_metrics() {
        let wp = WhitePoint::new(Chromaticity::D65);
        assert!(wp.cct.is_none());
        let wp = wp.with_metrics(6504.0, 0.003);
        assert_eq!(wp.cct, Some(6504.0));
        assert_eq!(wp.duv, Some(0.003));
    }
}
