//! Parameterized distance shaper.
//!
//! Distances from the achromatic axis below `threshold` are untouched.
//! Above it they follow
//!
//! ```text
//! thr + scale * nd / (1 + nd^power)^(1/power),   nd = (d - thr) / scale
//! ```
//!
//! which is monotonic, tangent to identity at `thr`, and with
//! [`scale_for_limit`] maps `limit` exactly to 1.

/// Scale that makes [`compress`] send `limit` to 1.
///
/// Requires `threshold < 1 < limit`.
pub fn scale_for_limit(limit: f64, threshold: f64, power: f64) -> f64 {
    let span = limit - threshold;
    let inner = ((1.0 - threshold) / span).powf(-power) - 1.0;
    span / inner.powf(1.0 / power)
}

/// Compresses `dist` with the given parameters.
pub fn compress(dist: f64, threshold: f64, scale: f64, power: f64) -> f64 {
    if dist < threshold {
        return dist;
    }
    let nd = (dist - threshold) / scale;
    threshold + scale * nd / (1.0 + nd.powf(power)).powf(1.0 / power)
}
