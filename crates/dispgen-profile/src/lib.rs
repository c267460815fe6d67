//! # dispgen-profile
//!
//! Turns a display characterization into an OCIO config.
//!
//! - [`ProfileRequest`] - typed display config record (`display_config.yaml`)
//! - [`Assembler`] - builds display color spaces and merges them into a
//!   base config obtained from a [`BaseConfigProvider`](dispgen_ocio::BaseConfigProvider)
//! - [`Pipeline`] - validation gate, assembly and writing
//!
//! # Usage
//!
//! ```rust
//! use dispgen_core::{DisplayCharacterization, Eotf, LuminanceProfile};
//! use dispgen_ocio::BuiltinProvider;
//! use dispgen_profile::{Pipeline, ProfileRequest};
//!
//! let disp = DisplayCharacterization::builder("Reference Monitor")
//!     .luminance(LuminanceProfile::new(0.001, 1000.0))
//!     .eotf(Eotf::Gamma(2.4))
//!     .build();
//! let provider = BuiltinProvider::new();
//! let generated = Pipeline::new(&provider)
//!     .generate(&ProfileRequest::new(disp))
//!     .unwrap();
//! assert_eq!(generated.document.created, ["Reference Monitor - GAMMA - Display"]);
//! ```
//!
//! # Dependencies
//!
//! - `dispgen-primaries` - display matrix
//! - `dispgen-transfer` - curve parameters
//! - `dispgen-gamut` - shaping stage per strategy
//! - `dispgen-validate` - rule checks
//! - `dispgen-ocio` - config model, base configs, writer
//!
//! # Used By
//!
//! - `dispgen-cli` - `generate` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assembler;

mod error;
mod pipeline;
mod request;

pub use assembler::{Assembler, OutputDocument};
pub use error::*;
pub use pipeline::*;
pub use request::*;
