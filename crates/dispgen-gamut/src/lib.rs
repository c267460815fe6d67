//! # dispgen-gamut
//!
//! Gamut mapping for display-linear RGB.
//!
//! Every strategy takes a triple of any sign and magnitude (NaN and
//! infinities included) and returns a triple in [0, 1] per channel:
//!
//! | Strategy | Behavior |
//! |----------|----------|
//! | `clip` | per-channel clamp |
//! | `relative` | same output as clip, in-range channels untouched |
//! | `absolute` | in-range colors returned as-is, others clamped |
//! | `saturation` | HSL: clamp lightness, keep hue and saturation |
//! | `perceptual` | normalize by max, compress distance to the achromatic axis |
//! | `soft_clip` | smooth per-channel knee above 0.8 |
//! | `adaptive` | chooses per color from a [`ContentHint`] |
//! | `hue_preserving` | reduce chroma at constant luma |
//!
//! # Usage
//!
//! ```rust
//! use dispgen_core::GamutMappingStrategy;
//! use dispgen_gamut::GamutMapper;
//!
//! let mapper = GamutMapper::new(GamutMappingStrategy::Perceptual);
//! let out = mapper.map([1.4, -0.2, 0.3]);
//! assert!(out.iter().all(|c| (0.0..=1.0).contains(c)));
//! ```
//!
//! The document side of a strategy (what the profile assembler writes)
//! is [`ShapingTransform`].
//!
//! # Dependencies
//!
//! - `dispgen-core` - strategy and hint enums
//!
//! # Used By
//!
//! - `dispgen-profile` - shaping stage of each display colorspace

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod compress;
pub mod hsl;
pub mod strategy;

mod mapper;
mod shaping;

pub use dispgen_core::{ContentHint, GamutMappingStrategy};
pub use mapper::*;
pub use shaping::*;

/// BT.709 luma weights, the default lightness axis for hue preservation.
pub const REC709_LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Replaces non-finite channels: NaN to 0, +inf to 1, -inf to 0.
#[inline]
pub fn sanitize(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|c| {
        if c.is_nan() {
            0.0
        } else if c == f64::INFINITY {
            1.0
        } else if c == f64::NEG_INFINITY {
            0.0
        } else {
            c
        }
    })
}

/// True when every channel is in [0, 1].
#[inline]
pub fn in_gamut(rgb: [f64; 3]) -> bool {
    rgb.iter().all(|c| (0.0..=1.0).contains(c))
}

#[inline]
pub(crate) fn clamp01(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|c| c.clamp(0.0, 1.0))
}
