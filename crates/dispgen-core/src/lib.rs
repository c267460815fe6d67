//! # dispgen-core
//!
//! Data model shared by every stage of the display profile generator.
//!
//! - [`Chromaticity`], [`PrimarySet`], [`WhitePoint`] - measured CIE xy data
//! - [`LuminanceProfile`] - black level, peak and contrast
//! - [`Eotf`] - closed set of transfer functions; `Gamma` owns its exponent
//! - [`ViewingConditions`] - ambient light, angle and surround
//! - [`GamutMappingStrategy`], [`ContentHint`], [`ChromaticAdaptation`]
//! - [`BaseConfigSelector`] - lookup key for the base OCIO config
//! - [`DisplayCharacterization`] - the aggregate validated and assembled per run
//!
//! ## Crate Structure
//!
//! ```text
//! dispgen-core (this crate)
//!    ^
//!    +-- dispgen-primaries (matrices, CCT, coverage)
//!    +-- dispgen-transfer  (PQ / HLG / gamma)
//!    +-- dispgen-gamut     (gamut mapping)
//!    +-- dispgen-validate  (rules)
//!    +-- dispgen-profile   (assembler)
//! ```
//!
//! Nothing here computes colorimetry. Derived white point metrics are
//! filled in by `dispgen-primaries`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod base;
pub mod characterization;
pub mod chromaticity;
pub mod eotf;
pub mod error;
pub mod gamut;
pub mod luminance;
pub mod viewing;

pub use base::*;
pub use characterization::*;
pub use chromaticity::*;
pub use eotf::*;
pub use error::*;
pub use gamut::*;
pub use luminance::*;
pub use viewing::*;
