//! Per-color strategy functions.
//!
//! All functions expect sanitized (finite) input; [`crate::GamutMapper`]
//! sanitizes before dispatching. Each ends in a clamp so rounding can
//! never leak a value outside [0, 1].

use crate::compress::{compress, scale_for_limit};
use crate::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::{clamp01, in_gamut};
use dispgen_core::ContentHint;

/// Distance from the achromatic axis where perceptual compression starts.
pub const PERCEPTUAL_THRESHOLD: f64 = 0.8;

/// Shaper exponent for perceptual compression.
pub const PERCEPTUAL_POWER: f64 = 1.2;

/// Default soft clip knee as a fraction of the ceiling.
pub const SOFT_CLIP_START: f64 = 0.8;

/// Largest channel value auto classification still treats as a mild
/// highlight overshoot.
pub const AUTO_SOFT_CLIP_LIMIT: f64 = 1.25;

/// Per-channel clamp to [0, 1].
pub fn clip(rgb: [f64; 3]) -> [f64; 3] {
    clamp01(rgb)
}

/// Relative colorimetric: in-range channels pass, others clamp.
pub fn relative(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|c| if (0.0..=1.0).contains(&c) { c } else { c.clamp(0.0, 1.0) })
}

/// Absolute colorimetric: an in-range color is returned untouched;
/// anything else is clamped per channel with no renormalization.
pub fn absolute(rgb: [f64; 3]) -> [f64; 3] {
    if in_gamut(rgb) {
        return rgb;
    }
    clamp01(rgb)
}

/// Clamps HSL lightness into [0, 1], caps saturation at 1, keeps hue.
pub fn saturation(rgb: [f64; 3]) -> [f64; 3] {
    if in_gamut(rgb) {
        return rgb;
    }
    let hsl = rgb_to_hsl(rgb);
    let mapped = Hsl {
        h: hsl.h,
        s: hsl.s.clamp(0.0, 1.0),
        l: hsl.l.clamp(0.0, 1.0),
    };
    clamp01(hsl_to_rgb(mapped))
}

/// Normalizes by the largest channel, then compresses each channel's
/// distance from the achromatic axis so the furthest lands on the
/// boundary.
pub fn perceptual(rgb: [f64; 3]) -> [f64; 3] {
    if in_gamut(rgb) {
        return rgb;
    }
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max <= 0.0 {
        return [0.0; 3];
    }
    let rgb = if max > 1.0 { rgb.map(|c| c / max) } else { rgb };
    let ach = max.min(1.0);

    let dist = rgb.map(|c| (ach - c) / ach);
    let limit = dist[0].max(dist[1]).max(dist[2]);
    if limit <= 1.0 {
        return clamp01(rgb);
    }

    let scale = scale_for_limit(limit, PERCEPTUAL_THRESHOLD, PERCEPTUAL_POWER);
    let out = dist.map(|d| {
        let cd = compress(d, PERCEPTUAL_THRESHOLD, scale, PERCEPTUAL_POWER);
        ach - cd * ach
    });
    clamp01(out)
}

/// Soft clip of a single channel.
///
/// Below `start` the value passes through. Above, the excess `e` follows
/// `start + e * (1 - (e / w)^2)` with `w = (3 * sqrt(3) / 2) * (ceiling - start)`,
/// which meets the ceiling with zero slope at `e = 1.5 * (ceiling - start)`
/// and holds it beyond. Negative input clamps to 0.
pub fn soft_clip_channel(v: f64, start: f64, ceiling: f64) -> f64 {
    if v <= 0.0 {
        return 0.0;
    }
    if v <= start {
        return v;
    }
    let range = ceiling - start;
    if range <= 0.0 {
        return v.min(ceiling);
    }
    let width = 1.5 * 3.0_f64.sqrt() * range;
    let excess = v - start;
    if excess >= 1.5 * range {
        return ceiling;
    }
    let r = excess / width;
    (start + excess * (1.0 - r * r)).min(ceiling)
}

/// Soft clip on each channel with the given knee (fraction of 1.0).
pub fn soft_clip(rgb: [f64; 3], start: f64) -> [f64; 3] {
    rgb.map(|c| soft_clip_channel(c, start, 1.0))
}

/// Reduces chroma around the luma axis until the color fits.
///
/// Lightness is `dot(weights, rgb)` clamped to [0, 1]; the result is
/// `L + t * (rgb - L)` for the largest `t` in [0, 1] that stays in range,
/// which leaves hexcone hue unchanged.
pub fn hue_preserving(rgb: [f64; 3], weights: [f64; 3]) -> [f64; 3] {
    if in_gamut(rgb) {
        return rgb;
    }
    let lum: f64 = rgb.iter().zip(weights).map(|(c, w)| c * w).sum();
    let lum = lum.clamp(0.0, 1.0);
    let mut t: f64 = 1.0;
    for c in rgb {
        let chroma = c - lum;
        if chroma > 0.0 {
            t = t.min((1.0 - lum) / chroma);
        } else if chroma < 0.0 {
            t = t.min(lum / -chroma);
        }
    }
    let t = t.max(0.0);
    clamp01(rgb.map(|c| lum + t * (c - lum)))
}

/// Strategy the adaptive mapper delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveChoice {
    /// Color already in range.
    PassThrough,
    /// No hint given.
    Clip,
    /// Perceptual compression.
    Perceptual,
    /// Saturation preservation.
    Saturation,
    /// Soft clip.
    SoftClip,
}

/// Classifies an out-of-range color for the adaptive strategy.
///
/// With [`ContentHint::Auto`]: a color that is only out of the gamut
/// triangle (negative channel, nothing above 1) keeps its saturation; a
/// mild highlight overshoot up to [`AUTO_SOFT_CLIP_LIMIT`] with no
/// negative channel is soft clipped; anything else is compressed
/// perceptually.
pub fn classify(rgb: [f64; 3], hint: Option<ContentHint>) -> AdaptiveChoice {
    if in_gamut(rgb) {
        return AdaptiveChoice::PassThrough;
    }
    match hint {
        None => AdaptiveChoice::Clip,
        Some(ContentHint::Photographic) => AdaptiveChoice::Perceptual,
        Some(ContentHint::Graphics) => AdaptiveChoice::Saturation,
        Some(ContentHint::Specular) => AdaptiveChoice::SoftClip,
        Some(ContentHint::Auto) => {
            let min = rgb[0].min(rgb[1]).min(rgb[2]);
            let max = rgb[0].max(rgb[1]).max(rgb[2]);
            if min < 0.0 && max <= 1.0 {
                AdaptiveChoice::Saturation
            } else if min >= 0.0 && max <= AUTO_SOFT_CLIP_LIMIT {
                AdaptiveChoice::SoftClip
            } else {
                AdaptiveChoice::Perceptual
            }
        }
    }
}

/// Adaptive mapping: classify, then delegate.
pub fn adaptive(rgb: [f64; 3], hint: Option<ContentHint>, soft_clip_start: f64) -> [f64; 3] {
    match classify(rgb, hint) {
        AdaptiveChoice::PassThrough => rgb,
        AdaptiveChoice::Clip => clip(rgb),
        AdaptiveChoice::Perceptual => perceptual(rgb),
        AdaptiveChoice::Saturation => saturation(rgb),
        AdaptiveChoice::SoftClip => soft_clip(rgb, soft_clip_start),
    }
}
