//! # dispgen-math
//!
//! Linear algebra used by the display characterization engine.
//!
//! Colorimetric matrices are derived from measured chromaticities, so
//! everything here is `f64`: the primaries solve is sensitive to
//! cancellation when the gamut triangle gets thin.
//!
//! - [`Mat3`] - 3x3 matrices (RGB to XYZ, chromatic adaptation)
//! - [`Vec3`] - XYZ / RGB triplets
//! - Chromatic adaptation transforms (Bradford, CAT02, von Kries, XYZ scaling)
//!
//! # Convention
//!
//! Row-major storage, column vectors:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use dispgen_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4123908, 0.3575843, 0.1804808],
//!     [0.2126390, 0.7151687, 0.0721923],
//!     [0.0193308, 0.1191948, 0.9505322],
//! ]);
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DMat3` / `DVec3`
//!
//! # Used By
//!
//! - `dispgen-primaries` - RGB/XYZ matrix derivation
//! - `dispgen-profile` - matrix transforms in the output document

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
