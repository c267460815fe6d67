//! # dispgen-ocio
//!
//! OCIO v2 config model for display profile generation.
//!
//! - [`Config`] - roles, color spaces, displays, view transforms
//! - [`Transform`] - matrix, exponent, range, builtin and group descriptions
//! - [`BaseConfigProvider`] - resolves a selector into a base config;
//!   [`BuiltinProvider`] serves the configs in [`builtin`]
//! - [`writer`] - serializes a config to OCIO YAML
//! - [`check`] - dangling reference checks
//!
//! # Usage
//!
//! ```
//! use dispgen_core::BaseConfigSelector;
//! use dispgen_ocio::{BaseConfigProvider, BuiltinProvider, writer};
//!
//! let config = BuiltinProvider::new()
//!     .resolve(&BaseConfigSelector::default())
//!     .unwrap();
//! let yaml = writer::to_yaml_string(&config).unwrap();
//! assert!(yaml.contains("!<ColorSpace>"));
//! ```
//!
//! # Dependencies
//!
//! - `dispgen-core` - base config selector
//! - `serde`, `serde_yaml`, `regex` - document writing
//!
//! # Used By
//!
//! - `dispgen-profile` - merges display color spaces into a base config
//! - `dispgen-cli` - `bases` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colorspace;
mod config;
mod display;
mod error;
mod provider;
mod transform;

pub mod builtin;
pub mod check;
pub mod writer;

pub use colorspace::{BitDepth, ColorSpace, ColorSpaceBuilder, Encoding, ReferenceSpace};
pub use config::{Config, ProfileVersion};
pub use display::{Display, View, ViewTransform};
pub use error::{OcioError, OcioResult};
pub use provider::{BaseConfigProvider, BuiltinProvider};
pub use transform::*;
pub use writer::{to_yaml_string, write_config};
