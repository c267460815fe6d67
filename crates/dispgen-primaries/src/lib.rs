//! # dispgen-primaries
//!
//! Colorimetry engine for measured displays.
//!
//! Pure functions over CIE xy chromaticities:
//!
//! - [`rgb_to_xyz_matrix`] / [`xyz_to_rgb_matrix`] - primaries + white solve
//! - [`display_matrix`] - the XYZ (D65 reference) to display RGB matrix,
//!   optionally with chromatic adaptation
//! - [`estimate_cct_duv`] / [`derive_white_point`] - correlated color
//!   temperature and Planckian distance
//! - [`gamut_coverage`] - xy triangle area relative to a reference gamut
//! - [`ReferenceGamut`] - standard primaries (Rec.709, P3, Rec.2020, AP1)
//!
//! # Usage
//!
//! ```rust
//! use dispgen_core::Chromaticity;
//! use dispgen_math::Vec3;
//! use dispgen_primaries::{rgb_to_xyz_matrix, ReferenceGamut};
//!
//! let m = rgb_to_xyz_matrix(&ReferenceGamut::Rec709.primaries(), Chromaticity::D65).unwrap();
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - `dispgen-core` - chromaticity types
//! - `dispgen-math` - matrix operations
//!
//! # Used By
//!
//! - `dispgen-validate` - coverage and white point rules
//! - `dispgen-profile` - matrix transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cct;
mod coverage;
mod error;
mod matrix;
mod standard;

pub use cct::*;
pub use coverage::*;
pub use error::*;
pub use matrix::*;
pub use standard::*;
