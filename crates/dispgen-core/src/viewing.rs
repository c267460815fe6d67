//! Viewing environment.

use crate::error::{Error, Result, normalize_name};
use std::fmt;
use std::str::FromStr;

/// Surround category around the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surround {
    /// Dark room, e.g. grading suite.
    Dark,
    /// Dim surround, the usual reference for video mastering.
    #[default]
    Dim,
    /// Average office lighting.
    Average,
}

impl Surround {
    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Dim => "dim",
            Self::Average => "average",
        }
    }
}

impl fmt::Display for Surround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surround {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "dark" => Ok(Self::Dark),
            "dim" => Ok(Self::Dim),
            "average" => Ok(Self::Average),
            _ => Err(Error::UnknownSurround { name: s.to_string() }),
        }
    }
}

/// Ambient light, viewing angle and surround.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    /// Ambient luminance in cd/m².
    pub ambient_light: f64,
    /// Viewing angle off-axis in degrees.
    pub viewing_angle: f64,
    /// Surround category.
    pub surround: Surround,
}

impl ViewingConditions {
    /// Default ambient luminance (cd/m²).
    pub const DEFAULT_AMBIENT: f64 = 5.0;
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self {
            ambient_light: Self::DEFAULT_AMBIENT,
            viewing_angle: 0.0,
            surround: Surround::Dim,
        }
    }
}
