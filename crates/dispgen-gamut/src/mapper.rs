//! Strategy dispatch.

use crate::strategy::{self, SOFT_CLIP_START};
use crate::{REC709_LUMA, sanitize};
use dispgen_core::{ContentHint, GamutMappingStrategy};
use tracing::debug;

/// Maps linear RGB into [0, 1] with a fixed strategy.
///
/// ```rust
/// use dispgen_core::{ContentHint, GamutMappingStrategy};
/// use dispgen_gamut::GamutMapper;
///
/// let m = GamutMapper::new(GamutMappingStrategy::Adaptive)
///     .with_hint(Some(ContentHint::Specular));
/// assert_eq!(m.map([0.5, 0.5, 0.5]), [0.5, 0.5, 0.5]);
/// assert!(m.map([1.2, 0.5, 0.5])[0] <= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapper {
    strategy: GamutMappingStrategy,
    hint: Option<ContentHint>,
    luma: [f64; 3],
    soft_clip_start: f64,
}

impl GamutMapper {
    /// Mapper with default luma weights (Rec.709), knee 0.8 and no hint.
    pub fn new(strategy: GamutMappingStrategy) -> Self {
        debug!(strategy = %strategy, "GamutMapper::new");
        Self {
            strategy,
            hint: None,
            luma: REC709_LUMA,
            soft_clip_start: SOFT_CLIP_START,
        }
    }

    /// Content hint for the adaptive strategy.
    pub fn with_hint(mut self, hint: Option<ContentHint>) -> Self {
        self.hint = hint;
        self
    }

    /// Luma weights for hue preservation, e.g. the Y row of the display
    /// RGB to XYZ matrix. Weights are normalized to sum to 1; unusable
    /// weights fall back to Rec.709.
    pub fn with_luma(mut self, weights: [f64; 3]) -> Self {
        let sum: f64 = weights.iter().sum();
        self.luma = if sum.is_finite() && sum > 0.0 && weights.iter().all(|w| *w >= 0.0) {
            weights.map(|w| w / sum)
        } else {
            REC709_LUMA
        };
        self
    }

    /// Soft clip knee as a fraction of 1.0, clamped to [0, 1].
    pub fn with_soft_clip_start(mut self, start: f64) -> Self {
        self.soft_clip_start = if start.is_finite() {
            start.clamp(0.0, 1.0)
        } else {
            SOFT_CLIP_START
        };
        self
    }

    /// Strategy in use.
    pub fn strategy(&self) -> GamutMappingStrategy {
        self.strategy
    }

    /// Maps one color. A channel that is +inf on input lands on the
    /// ceiling whatever the strategy.
    pub fn map(&self, input: [f64; 3]) -> [f64; 3] {
        let rgb = sanitize(input);
        let mut out = match self.strategy {
            GamutMappingStrategy::Clip => strategy::clip(rgb),
            GamutMappingStrategy::Relative => strategy::relative(rgb),
            GamutMappingStrategy::Absolute => strategy::absolute(rgb),
            GamutMappingStrategy::Saturation => strategy::saturation(rgb),
            GamutMappingStrategy::Perceptual => strategy::perceptual(rgb),
            GamutMappingStrategy::SoftClip => strategy::soft_clip(rgb, self.soft_clip_start),
            GamutMappingStrategy::Adaptive => {
                strategy::adaptive(rgb, self.hint, self.soft_clip_start)
            }
            GamutMappingStrategy::HuePreserving => strategy::hue_preserving(rgb, self.luma),
        };
        for (o, c) in out.iter_mut().zip(input) {
            if c == f64::INFINITY {
                *o = 1.0;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_normalized() {
        let m = GamutMapper::new(GamutMappingStrategy::HuePreserving).with_luma([2.0, 6.0, 2.0]);
        assert_eq!(m.luma, [0.2, 0.6, 0.2]);
        let m = m.with_luma([f64::NAN, 0.0, 0.0]);
        assert_eq!(m.luma, REC709_LUMA);
    }

    #[test]
    fn test_adaptive_without_hint_clips() {
        let m = GamutMapper::new(GamutMappingStrategy::Adaptive);
        assert_eq!(m.map([1.5, -0.5, 0.5]), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_infinite_channel_hits_ceiling_for_any_knee() {
        for start in [0.0, 0.5, 0.8, 0.95, 1.0] {
            let m = GamutMapper::new(GamutMappingStrategy::SoftClip).with_soft_clip_start(start);
            assert_eq!(m.map([f64::INFINITY, 0.2, f64::NAN])[0], 1.0, "start {start}");
            assert_eq!(m.map([f64::INFINITY, 0.2, f64::NAN])[2], 0.0, "start {start}");
        }
    }

    #[test]
    fn test_non_finite_input() {
        for st in GamutMappingStrategy::ALL {
            let out = GamutMapper::new(st).map([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
            assert_eq!(out, [0.0, 1.0, 0.0], "{st}");
        }
    }
}
