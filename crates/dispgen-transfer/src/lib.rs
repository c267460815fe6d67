//! # dispgen-transfer
//!
//! Transfer function models for display profiles.
//!
//! Each model maps code values to display-linear light and back over
//! [0, 1]:
//!
//! | Model | `to_linear` returns | Notes |
//! |-------|---------------------|-------|
//! | [`Pq`] | luminance / 10000 cd/m² | [`Pq::display_scale`] rescales to peak-relative |
//! | [`Hlg`] | display light, system gamma applied | gamma from peak and ambient |
//! | [`Gamma`] | `v^gamma` | |
//!
//! Inputs are clamped to [0, 1] before evaluation.
//!
//! # Usage
//!
//! ```rust
//! use dispgen_core::{Eotf, LuminanceProfile, ViewingConditions};
//! use dispgen_transfer::{TransferFunction, TransferModel};
//!
//! let lum = LuminanceProfile::new(0.005, 1000.0);
//! let model = TransferModel::for_eotf(Eotf::Hlg, &lum, &ViewingConditions::default()).unwrap();
//! let code = model.from_linear(0.25);
//! assert!((model.to_linear(code) - 0.25).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - `dispgen-core` - EOTF selection and luminance data
//!
//! # Used By
//!
//! - `dispgen-profile` - curve parameters in the output document

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod hlg;
pub mod pq;

mod error;
mod model;

pub use error::*;
pub use gamma::Gamma;
pub use hlg::Hlg;
pub use model::*;
pub use pq::Pq;

/// A code value <-> linear light mapping over [0, 1].
pub trait TransferFunction {
    /// Decodes a code value to linear light.
    fn to_linear(&self, code: f64) -> f64;

    /// Encodes linear light to a code value.
    fn from_linear(&self, linear: f64) -> f64;

    /// Short name for logs and descriptions.
    fn name(&self) -> &'static str;
}

/// Clamps to [0, 1], mapping NaN to 0.
#[inline]
pub(crate) fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
