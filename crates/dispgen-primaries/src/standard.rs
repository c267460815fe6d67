//! Standard primary sets used as references.

use dispgen_core::{Chromaticity, PrimarySet};
use std::fmt;
use std::str::FromStr;

/// ITU-R BT.709 / sRGB primaries.
pub const REC709: PrimarySet = PrimarySet::new([0.64, 0.33], [0.30, 0.60], [0.15, 0.06]);

/// ITU-R BT.2020 primaries.
pub const REC2020: PrimarySet = PrimarySet::new([0.708, 0.292], [0.170, 0.797], [0.131, 0.046]);

/// DCI-P3 (and Display P3) primaries.
pub const P3: PrimarySet = PrimarySet::new([0.680, 0.320], [0.265, 0.690], [0.150, 0.060]);

/// ACES AP1 primaries.
pub const ACES_AP1: PrimarySet = PrimarySet::new([0.713, 0.293], [0.165, 0.830], [0.128, 0.044]);

/// A named reference gamut for coverage figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceGamut {
    /// BT.709, the default coverage reference.
    #[default]
    Rec709,
    /// DCI-P3, DCI white.
    DciP3,
    /// Display P3, D65 white.
    DisplayP3,
    /// BT.2020.
    Rec2020,
    /// ACES AP1.
    AcesAp1,
}

impl ReferenceGamut {
    /// All reference gamuts.
    pub const ALL: [Self; 5] = [
        Self::Rec709,
        Self::DciP3,
        Self::DisplayP3,
        Self::Rec2020,
        Self::AcesAp1,
    ];

    /// Primaries of this gamut.
    pub fn primaries(self) -> PrimarySet {
        match self {
            Self::Rec709 => REC709,
            Self::DciP3 | Self::DisplayP3 => P3,
            Self::Rec2020 => REC2020,
            Self::AcesAp1 => ACES_AP1,
        }
    }

    /// Reference white.
    pub fn white(self) -> Chromaticity {
        match self {
            Self::DciP3 => Chromaticity::DCI,
            Self::AcesAp1 => Chromaticity::new(0.32168, 0.33767),
            _ => Chromaticity::D65,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rec709 => "Rec.709",
            Self::DciP3 => "DCI-P3",
            Self::DisplayP3 => "Display P3",
            Self::Rec2020 => "Rec.2020",
            Self::AcesAp1 => "ACES AP1",
        }
    }
}

impl fmt::Display for ReferenceGamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceGamut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "rec709" | "bt709" | "srgb" => Ok(Self::Rec709),
            "dcip3" | "p3" => Ok(Self::DciP3),
            "displayp3" | "p3d65" => Ok(Self::DisplayP3),
            "rec2020" | "bt2020" => Ok(Self::Rec2020),
            "acesap1" | "ap1" | "acescg" => Ok(Self::AcesAp1),
            _ => Err(format!("unknown reference gamut '{s}'")),
        }
    }
}
