//! SMPTE ST 2084 perceptual quantizer.
//!
//! Absolute curve: code [0, 1] <-> 0..10000 cd/m². The model's linear
//! side is luminance normalized by 10000, so a 1000 cd/m² display peaks
//! at 0.1 linear; [`Pq::display_scale`] turns that into peak-relative
//! light when composing a display transform.
//!
//! ```rust
//! use dispgen_transfer::pq;
//!
//! let code = pq::oetf(100.0);
//! assert!((code - 0.5081).abs() < 1e-4);
//! assert!((pq::eotf(code) - 100.0).abs() < 1e-9);
//! ```

use crate::error::{TransferError, TransferResult};
use crate::{TransferFunction, unit};

/// Luminance at code value 1.0, cd/m².
pub const L_MAX: f64 = 10000.0;

/// Luminance OCIO's built-in ST-2084 curve maps to linear 1.0, cd/m².
pub const OCIO_REFERENCE_NITS: f64 = 100.0;

const M1: f64 = 2610.0 / 16384.0;
const M2: f64 = 2523.0 / 4096.0 * 128.0;
const C1: f64 = 3424.0 / 4096.0;
const C2: f64 = 2413.0 / 4096.0 * 32.0;
const C3: f64 = 2392.0 / 4096.0 * 32.0;

/// Code value to absolute luminance (cd/m²).
pub fn eotf(code: f64) -> f64 {
    let code = unit(code);
    if code <= 0.0 {
        return 0.0;
    }
    let p = code.powf(1.0 / M2);
    let num = (p - C1).max(0.0);
    let den = C2 - C3 * p;
    L_MAX * (num / den).powf(1.0 / M1)
}

/// Absolute luminance (cd/m²) to code value.
pub fn oetf(nits: f64) -> f64 {
    if nits.is_nan() || nits <= 0.0 {
        return 0.0;
    }
    let y = (nits / L_MAX).min(1.0);
    let yp = y.powf(M1);
    ((C1 + C2 * yp) / (1.0 + C3 * yp)).powf(M2)
}

/// PQ model bound to a display peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pq {
    peak: f64,
}

impl Pq {
    /// Model for a display peaking at `peak` cd/m².
    pub fn new(peak: f64) -> TransferResult<Self> {
        if !peak.is_finite() || peak <= 0.0 {
            return Err(TransferError::InvalidPeak { curve: "PQ", peak });
        }
        Ok(Self { peak })
    }

    /// Display peak in cd/m².
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Factor from normalized PQ linear to peak-relative linear
    /// (`10000 / peak`).
    pub fn display_scale(&self) -> f64 {
        L_MAX / self.peak
    }

    /// Factor applied to peak-relative linear before OCIO's ST-2084
    /// curve, which treats 1.0 as 100 cd/m² (`peak / 100`).
    pub fn ocio_scale(&self) -> f64 {
        self.peak / OCIO_REFERENCE_NITS
    }

    /// Code value of the display peak.
    pub fn peak_code(&self) -> f64 {
        oetf(self.peak)
    }
}

impl TransferFunction for Pq {
    fn to_linear(&self, code: f64) -> f64 {
        eotf(code) / L_MAX
    }

    fn from_linear(&self, linear: f64) -> f64 {
        oetf(unit(linear) * L_MAX)
    }

    fn name(&self) -> &'static str {
        "PQ"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_endpoints() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), L_MAX, epsilon = 1e-6);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(L_MAX), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_levels() {
        assert_abs_diff_eq!(oetf(1000.0), 0.7518, epsilon = 1e-4);
        assert_abs_diff_eq!(oetf(203.0), 0.5806, epsilon = 1e-4);
    }

    #[test]
    fn test_scales() {
        let pq = Pq::new(1000.0).unwrap();
        assert_eq!(pq.display_scale(), 10.0);
        assert_eq!(pq.ocio_scale(), 10.0);
        assert_abs_diff_eq!(pq.to_linear(pq.peak_code()) * pq.display_scale(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bad_peak() {
        assert!(Pq::new(0.0).is_err());
        assert!(Pq::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_out_of_domain_clamps() {
        let pq = Pq::new(1000.0).unwrap();
        assert_eq!(pq.to_linear(-0.5), 0.0);
        assert_abs_diff_eq!(pq.to_linear(1.5), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pq.from_linear(2.0), 1.0, epsilon = 1e-12);
    }
}
