//! # dispgen-validate
//!
//! Rule-based checks over a [`DisplayCharacterization`](dispgen_core::DisplayCharacterization).
//!
//! Ten rules cover primaries, white point, luminance, contrast, gamut
//! coverage, white point temperature and duv, viewing conditions and
//! gamma. Each enabled rule that fails adds a warning to the
//! [`Report`]; in strict mode every finding becomes an error and the
//! report is rejected.
//!
//! # Usage
//!
//! ```rust
//! use dispgen_core::DisplayCharacterization;
//! use dispgen_validate::{RuleSet, Validator};
//!
//! let disp = DisplayCharacterization::builder("Monitor").build();
//! let rules = RuleSet::default();
//! let report = Validator::new(&rules).validate(&disp, &[disp.eotf]);
//! assert!(report.accepted());
//! ```
//!
//! Thresholds come from [`RuleSet::default`] merged under a YAML
//! override file, see [`RuleSet::load`].
//!
//! # Dependencies
//!
//! - `dispgen-core` - data model
//! - `dispgen-primaries` - coverage and CCT estimation
//! - `serde`, `serde_yaml` - rule set files
//!
//! # Used By
//!
//! - `dispgen-profile` - pipeline gate before assembly
//! - `dispgen-cli` - `validate` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod report;
mod rules;
mod validator;

pub use error::*;
pub use report::*;
pub use rules::*;
pub use validator::*;
