//! Correlated color temperature and duv.
//!
//! The Planckian locus is modeled in CIE 1960 UCS with Krystek's (1985)
//! rational approximation, valid from 1000 K to 15000 K. The nearest
//! locus point is found by a coarse scan in mired space followed by a
//! golden-section refinement of the squared distance.
//!
//! duv is the signed distance to that point: positive above the locus
//! (greener), negative below (more magenta).

use crate::error::{ColorimetryError, ColorimetryResult};
use dispgen_core::{Chromaticity, WhitePoint};
use tracing::trace;

/// Lowest temperature on the modeled locus.
pub const LOCUS_MIN_K: f64 = 1000.0;
/// Highest temperature on the modeled locus.
pub const LOCUS_MAX_K: f64 = 15000.0;

const COARSE_STEPS: usize = 200;
const REFINE_ITERATIONS: usize = 80;
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Planckian locus point (u, v) at temperature `t` Kelvin.
pub fn planckian_uv(t: f64) -> (f64, f64) {
    let t2 = t * t;
    let u = (0.860_117_757 + 1.541_182_54e-4 * t + 1.286_412_12e-7 * t2)
        / (1.0 + 8.424_202_35e-4 * t + 7.081_451_63e-7 * t2);
    let v = (0.317_398_726 + 4.228_062_45e-5 * t + 4.204_816_91e-8 * t2)
        / (1.0 - 2.897_418_16e-5 * t + 1.614_560_53e-7 * t2);
    (u, v)
}

fn mired_distance_sq(u: f64, v: f64, mired: f64) -> f64 {
    let (lu, lv) = planckian_uv(1.0e6 / mired);
    (u - lu).powi(2) + (v - lv).powi(2)
}

/// Estimates `(cct_kelvin, duv)` for a white chromaticity.
///
/// # Errors
///
/// [`ColorimetryError::CctOutOfRange`] when the chromaticity is not
/// finite or has no CIE 1960 projection.
///
/// # Example
///
/// ```rust
/// use dispgen_core::Chromaticity;
/// use dispgen_primaries::estimate_cct_duv;
///
/// let (cct, duv) = estimate_cct_duv(Chromaticity::D65).unwrap();
/// assert!((cct - 6504.0).abs() < 10.0);
/// assert!(duv.abs() < 0.006);
/// ```
pub fn estimate_cct_duv(white: Chromaticity) -> ColorimetryResult<(f64, f64)> {
    let out_of_range = |reason: &str| ColorimetryError::CctOutOfRange {
        x: white.x,
        y: white.y,
        reason: reason.to_string(),
    };
    if !white.is_finite() {
        return Err(out_of_range("non-finite chromaticity"));
    }
    let (u, v) = white.to_uv().ok_or_else(|| out_of_range("no CIE 1960 projection"))?;

    let lo = 1.0e6 / LOCUS_MAX_K;
    let hi = 1.0e6 / LOCUS_MIN_K;
    let step = (hi - lo) / COARSE_STEPS as f64;

    let best = (0..=COARSE_STEPS)
        .map(|i| (i, mired_distance_sq(u, v, lo + step * i as f64)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let mut a = (lo + step * (best as f64 - 1.0)).max(lo);
    let mut b = (lo + step * (best as f64 + 1.0)).min(hi);
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    for _ in 0..REFINE_ITERATIONS {
        if mired_distance_sq(u, v, c) < mired_distance_sq(u, v, d) {
            b = d;
        } else {
            a = c;
        }
        c = b - INV_PHI * (b - a);
        d = a + INV_PHI * (b - a);
    }

    let mired = 0.5 * (a + b);
    let cct = 1.0e6 / mired;
    let (_, lv) = planckian_uv(cct);
    let duv = mired_distance_sq(u, v, mired).sqrt().copysign(v - lv);
    trace!(x = white.x, y = white.y, cct, duv, "cct::estimate");
    Ok((cct, duv))
}

/// White point with CCT and duv attached.
///
/// A chromaticity the estimator cannot handle keeps `None` metrics
/// rather than failing; validation reports it.
pub fn derive_white_point(xy: Chromaticity) -> WhitePoint {
    match estimate_cct_duv(xy) {
        Ok((cct, duv)) => WhitePoint::new(xy).with_metrics(cct, duv),
        Err(_) => WhitePoint::new(xy),
    }
}
