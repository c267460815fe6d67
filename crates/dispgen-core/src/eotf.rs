//! Electro-optical transfer function selection.
//!
//! [`Eotf`] is a closed set. `Gamma` owns its exponent, so a gamma curve
//! without a value cannot be constructed:
//!
//! ```rust
//! use dispgen_core::{Eotf, EotfKind};
//!
//! let pq = Eotf::from_parts("pq", None).unwrap();
//! assert_eq!(pq.kind(), EotfKind::Pq);
//!
//! let g = Eotf::from_parts("GAMMA", Some(2.4)).unwrap();
//! assert_eq!(g.gamma_value(), Some(2.4));
//!
//! assert!(Eotf::from_parts("GAMMA", None).is_err());
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Largest gamma exponent accepted at construction.
///
/// This bounds what the document can represent; the narrower
/// recommended range is a validation rule.
pub const MAX_GAMMA: f64 = 10.0;

/// A display transfer function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eotf {
    /// SMPTE ST 2084 perceptual quantizer.
    Pq,
    /// ITU-R BT.2100 hybrid log-gamma.
    Hlg,
    /// Pure power law.
    Gamma(f64),
}

/// Parameterless tag of an [`Eotf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EotfKind {
    /// PQ
    Pq,
    /// HLG
    Hlg,
    /// GAMMA
    Gamma,
}

impl EotfKind {
    /// Upper-case tag used in colorspace names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pq => "PQ",
            Self::Hlg => "HLG",
            Self::Gamma => "GAMMA",
        }
    }

    /// True for high dynamic range curves.
    pub fn is_hdr(self) -> bool {
        matches!(self, Self::Pq | Self::Hlg)
    }
}

impl fmt::Display for EotfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EotfKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PQ" | "ST2084" | "ST-2084" | "ST_2084" => Ok(Self::Pq),
            "HLG" => Ok(Self::Hlg),
            "GAMMA" => Ok(Self::Gamma),
            _ => Err(Error::UnknownEotf { name: s.to_string() }),
        }
    }
}

impl Eotf {
    /// Gamma curve with exponent `value`.
    ///
    /// Fails for non-finite, non-positive or values above [`MAX_GAMMA`].
    pub fn gamma(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 || value > MAX_GAMMA {
            return Err(Error::InvalidEotfParameter {
                reason: format!("gamma value {value} outside (0, {MAX_GAMMA}]"),
            });
        }
        Ok(Self::Gamma(value))
    }

    /// Builds from a tag and optional gamma exponent, as read from config.
    ///
    /// The exponent is ignored for PQ and HLG and required for GAMMA.
    pub fn from_parts(tag: &str, gamma_value: Option<f64>) -> Result<Self> {
        match tag.parse::<EotfKind>()? {
            EotfKind::Pq => Ok(Self::Pq),
            EotfKind::Hlg => Ok(Self::Hlg),
            EotfKind::Gamma => match gamma_value {
                Some(v) => Self::gamma(v),
                None => Err(Error::InvalidEotfParameter {
                    reason: "GAMMA requires gamma_value".into(),
                }),
            },
        }
    }

    /// The tag.
    pub fn kind(&self) -> EotfKind {
        match self {
            Self::Pq => EotfKind::Pq,
            Self::Hlg => EotfKind::Hlg,
            Self::Gamma(_) => EotfKind::Gamma,
        }
    }

    /// Gamma exponent for `Gamma`, `None` otherwise.
    pub fn gamma_value(&self) -> Option<f64> {
        match self {
            Self::Gamma(g) => Some(*g),
            _ => None,
        }
    }
}

impl fmt::Display for Eotf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gamma(g) => write!(f, "GAMMA {g}"),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!("st-2084".parse::<EotfKind>().unwrap(), EotfKind::Pq);
        assert_eq!(" hlg ".parse::<EotfKind>().unwrap(), EotfKind::Hlg);
        assert!(matches!(
            "sRGB".parse::<EotfKind>(),
            Err(Error::UnknownEotf { .. })
        ));
    }

    #[test]
    fn test_gamma_bounds() {
        assert!(Eotf::gamma(2.2).is_ok());
        assert!(Eotf::gamma(5.0).is_ok());
        assert!(Eotf::gamma(0.0).is_err());
        assert!(Eotf::gamma(-1.0).is_err());
        assert!(Eotf::gamma(f64::NAN).is_err());
        assert!(Eotf::gamma(11.0).is_err());
    }

    #[test]
    fn test_gamma_requires_value() {
        assert!(matches!(
            Eotf::from_parts("gamma", None),
            Err(Error::InvalidEotfParameter { .. })
        ));
    }

    #[test]
    fn test_pq_ignores_gamma() {
        assert_eq!(Eotf::from_parts("PQ", Some(2.4)).unwrap(), Eotf::Pq);
    }

    #[test]
    fn test_display() {
        assert_eq!(Eotf::Hlg.to_string(), "HLG");
        assert_eq!(Eotf::Gamma(2.4).to_string(), "GAMMA 2.4");
        assert!(!EotfKind::Gamma.is_hdr());
    }
}
