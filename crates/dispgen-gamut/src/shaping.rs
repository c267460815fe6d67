//! Document-side form of each strategy.
//!
//! A generated config cannot run [`GamutMapper`](crate::GamutMapper)
//! itself, so each display colorspace ends in a shaping transform that
//! the assembler renders as either a range clamp or a named builtin.

use dispgen_core::{ContentHint, GamutMappingStrategy};

/// Prefix of the builtin style names written for non-clamp strategies.
pub const BUILTIN_STYLE_PREFIX: &str = "GAMUT-MAP - ";

/// Last stage of a display colorspace.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapingTransform {
    /// Hard range clamp.
    Clamp {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Named builtin the consuming host resolves.
    Builtin {
        /// Style name, e.g. `GAMUT-MAP - PERCEPTUAL`.
        style: String,
    },
}

impl ShapingTransform {
    /// Shaping stage for `strategy` with the display's content hint.
    ///
    /// Clip, relative and absolute all reduce to a [0, 1] clamp. The hint
    /// only matters for adaptive, which resolves the way
    /// [`GamutMapper`](crate::GamutMapper) does: no hint clamps, a fixed
    /// hint writes the strategy it delegates to, and `auto` keeps the
    /// per-color `ADAPTIVE` builtin.
    pub fn for_strategy(strategy: GamutMappingStrategy, hint: Option<ContentHint>) -> Self {
        const CLAMP: ShapingTransform = ShapingTransform::Clamp { min: 0.0, max: 1.0 };
        let tag = match strategy {
            GamutMappingStrategy::Clip
            | GamutMappingStrategy::Relative
            | GamutMappingStrategy::Absolute => return CLAMP,
            GamutMappingStrategy::Perceptual => "PERCEPTUAL",
            GamutMappingStrategy::Saturation => "SATURATION",
            GamutMappingStrategy::SoftClip => "SOFT-CLIP",
            GamutMappingStrategy::Adaptive => match hint {
                None => return CLAMP,
                Some(ContentHint::Photographic) => "PERCEPTUAL",
                Some(ContentHint::Graphics) => "SATURATION",
                Some(ContentHint::Specular) => "SOFT-CLIP",
                Some(ContentHint::Auto) => "ADAPTIVE",
            },
            GamutMappingStrategy::HuePreserving => "HUE-PRESERVING",
        };
        Self::Builtin {
            style: format!("{BUILTIN_STYLE_PREFIX}{tag}"),
        }
    }

    /// True for the clamp form.
    pub fn is_clamp(&self) -> bool {
        matches!(self, Self::Clamp { .. })
    }
}
