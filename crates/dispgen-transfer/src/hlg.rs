//! ITU-R BT.2100 hybrid log-gamma.
//!
//! The OETF is a square-root segment up to `E = 1/12` and a log segment
//! above. Display light is the inverse OETF followed by the OOTF, whose
//! system gamma depends on display peak and ambient luminance
//! (BT.2100 note 5e, extended form from BT.2390):
//!
//! ```text
//! gamma = 1.2 * 1.111^log2(Lw / 1000) * 0.98^log2(Lamb / 5)
//! ```

use crate::error::{TransferError, TransferResult};
use crate::{TransferFunction, unit};

const A: f64 = 0.178_832_77;
const B: f64 = 1.0 - 4.0 * A;
const C: f64 = 0.559_910_729_529_562_1; // 0.5 - A * ln(4A)

/// Nominal peak the reference system gamma of 1.2 is defined at.
pub const REFERENCE_PEAK: f64 = 1000.0;

/// Reference ambient luminance, cd/m².
pub const REFERENCE_AMBIENT: f64 = 5.0;

/// BT.2100 luminance weights used by the OOTF.
pub const BT2100_LUMA: [f64; 3] = [0.2627, 0.6780, 0.0593];

/// Scene linear [0, 1] to HLG code value.
pub fn oetf(e: f64) -> f64 {
    let e = unit(e);
    if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG code value to scene linear [0, 1].
pub fn inverse_oetf(code: f64) -> f64 {
    let code = unit(code);
    if code <= 0.5 {
        code * code / 3.0
    } else {
        (((code - C) / A).exp() + B) / 12.0
    }
}

/// System gamma for a display peaking at `peak` cd/m² in `ambient` cd/m².
///
/// The ambient term is dropped when `ambient <= 0`.
pub fn system_gamma(peak: f64, ambient: f64) -> f64 {
    let mut gamma = 1.2 * 1.111_f64.powf((peak / REFERENCE_PEAK).log2());
    if ambient > 0.0 {
        gamma *= 0.98_f64.powf((ambient / REFERENCE_AMBIENT).log2());
    }
    gamma
}

/// Luminance-based OOTF on scene-linear RGB: `Ys^(gamma - 1) * rgb`.
pub fn ootf_rgb(rgb: [f64; 3], gamma: f64) -> [f64; 3] {
    let ys = luma(rgb);
    if ys <= 0.0 {
        return [0.0; 3];
    }
    let k = ys.powf(gamma - 1.0);
    rgb.map(|c| c * k)
}

/// Inverse of [`ootf_rgb`].
pub fn inverse_ootf_rgb(rgb: [f64; 3], gamma: f64) -> [f64; 3] {
    let yd = luma(rgb);
    if yd <= 0.0 {
        return [0.0; 3];
    }
    let k = yd.powf((1.0 - gamma) / gamma);
    rgb.map(|c| c * k)
}

fn luma(rgb: [f64; 3]) -> f64 {
    rgb.iter().zip(BT2100_LUMA).map(|(c, w)| c * w).sum()
}

/// HLG model with a fixed system gamma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hlg {
    peak: f64,
    gamma: f64,
}

impl Hlg {
    /// Model for `peak` cd/m² viewed in `ambient` cd/m².
    pub fn new(peak: f64, ambient: f64) -> TransferResult<Self> {
        if !peak.is_finite() || peak <= 0.0 {
            return Err(TransferError::InvalidPeak { curve: "HLG", peak });
        }
        let gamma = system_gamma(peak, if ambient.is_finite() { ambient } else { 0.0 });
        Ok(Self { peak, gamma })
    }

    /// Display peak in cd/m².
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// System gamma.
    pub fn system_gamma(&self) -> f64 {
        self.gamma
    }
}

impl TransferFunction for Hlg {
    fn to_linear(&self, code: f64) -> f64 {
        inverse_oetf(code).powf(self.gamma)
    }

    fn from_linear(&self, linear: f64) -> f64 {
        oetf(unit(linear).powf(1.0 / self.gamma))
    }

    fn name(&self) -> &'static str {
        "HLG"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_segment_join() {
        assert_abs_diff_eq!(oetf(1.0 / 12.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(inverse_oetf(0.5), 1.0 / 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inverse_oetf(1.0), 1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_reference_gamma() {
        assert_abs_diff_eq!(system_gamma(1000.0, 5.0), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(system_gamma(1000.0, 0.0), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(system_gamma(2000.0, 5.0), 1.2 * 1.111, epsilon = 1e-9);
        assert!(system_gamma(1000.0, 50.0) < 1.2);
    }

    #[test]
    fn test_ootf_roundtrip() {
        let rgb = [0.3, 0.6, 0.1];
        let back = inverse_ootf_rgb(ootf_rgb(rgb, 1.2), 1.2);
        for (a, b) in rgb.iter().zip(back) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_model_peak_white() {
        let hlg = Hlg::new(1000.0, 5.0).unwrap();
        assert_abs_diff_eq!(hlg.to_linear(1.0), 1.0, epsilon = 1e-6);
        assert!(Hlg::new(-1.0, 5.0).is_err());
    }
}
