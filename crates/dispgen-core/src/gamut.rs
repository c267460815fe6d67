//! Gamut mapping strategy, content hints and chromatic adaptation choice.

use crate::error::{Error, Result, normalize_name};
use std::fmt;
use std::str::FromStr;

/// How out-of-gamut linear RGB is brought into [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamutMappingStrategy {
    /// Per-channel clamp.
    #[default]
    Clip,
    /// Compression toward the achromatic axis.
    Perceptual,
    /// HSL lightness clamp with saturation kept.
    Saturation,
    /// Relative colorimetric: clamp, in-range untouched.
    Relative,
    /// Absolute colorimetric: clamp with explicit pass-through.
    Absolute,
    /// Smooth per-channel roll-off above a knee.
    SoftClip,
    /// Picks perceptual, saturation or soft clip per color.
    Adaptive,
    /// Chroma reduction at constant luma.
    HuePreserving,
}

impl GamutMappingStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Clip,
        Self::Perceptual,
        Self::Saturation,
        Self::Relative,
        Self::Absolute,
        Self::SoftClip,
        Self::Adaptive,
        Self::HuePreserving,
    ];

    /// Config name (`soft_clip`, `hue_preserving`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Perceptual => "perceptual",
            Self::Saturation => "saturation",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::SoftClip => "soft_clip",
            Self::Adaptive => "adaptive",
            Self::HuePreserving => "hue_preserving",
        }
    }

    /// All config names.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl fmt::Display for GamutMappingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GamutMappingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == key)
            .ok_or_else(|| Error::UnknownGamutStrategy {
                name: s.to_string(),
                known: Self::names(),
            })
    }
}

/// Caller-supplied content type steering the adaptive strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentHint {
    /// Natural imagery; favors perceptual compression.
    Photographic,
    /// Flat synthetic colors; favors saturation preservation.
    Graphics,
    /// Highlights and emissive content; favors soft clip.
    Specular,
    /// Classify each color from its own values.
    Auto,
}

impl ContentHint {
    /// Config name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photographic => "photographic",
            Self::Graphics => "graphics",
            Self::Specular => "specular",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for ContentHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "photographic" | "photo" => Ok(Self::Photographic),
            "graphics" | "graphic" => Ok(Self::Graphics),
            "specular" | "highlights" => Ok(Self::Specular),
            "auto" => Ok(Self::Auto),
            _ => Err(Error::UnknownContentHint { name: s.to_string() }),
        }
    }
}

/// Whether and how to adapt the display white to the D65 reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaticAdaptation {
    /// Absolute colorimetry, no adaptation.
    #[default]
    None,
    /// Bradford.
    Bradford,
    /// CAT02.
    Cat02,
    /// von Kries.
    VonKries,
    /// XYZ scaling.
    XyzScaling,
}

impl ChromaticAdaptation {
    /// Config name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bradford => "bradford",
            Self::Cat02 => "cat02",
            Self::VonKries => "von_kries",
            Self::XyzScaling => "xyz_scaling",
        }
    }
}

impl FromStr for ChromaticAdaptation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "none" | "" => Ok(Self::None),
            "bradford" => Ok(Self::Bradford),
            "cat02" => Ok(Self::Cat02),
            "von_kries" | "vonkries" => Ok(Self::VonKries),
            "xyz_scaling" | "xyz" => Ok(Self::XyzScaling),
            _ => Err(Error::UnknownAdaptation { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_roundtrip() {
        for st in GamutMappingStrategy::ALL {
            assert_eq!(st.as_str().parse::<GamutMappingStrategy>().unwrap(), st);
        }
        assert_eq!(
            "Soft-Clip".parse::<GamutMappingStrategy>().unwrap(),
            GamutMappingStrategy::SoftClip
        );
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "vivid".parse::<GamutMappingStrategy>().unwrap_err();
        match err {
            Error::UnknownGamutStrategy { name, known } => {
                assert_eq!(name, "vivid");
                assert_eq!(known.len(), 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hint_and_adaptation() {
        assert_eq!("Graphics".parse::<ContentHint>().unwrap(), ContentHint::Graphics);
        assert_eq!(
            "von-kries".parse::<ChromaticAdaptation>().unwrap(),
            ChromaticAdaptation::VonKries
        );
        assert!("lab".parse::<ChromaticAdaptation>().is_err());
    }
}
