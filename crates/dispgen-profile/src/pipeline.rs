//! Validate, resolve, assemble and write, in that order.
//!
//! Strict mode is resolved per request: the record's
//! `validation.strict_mode`, then the caller override (CLI `--strict`),
//! then the rule file's `strict_mode`, else off. A strict run with any
//! error finding stops before the provider is called.

use crate::assembler::{Assembler, OutputDocument};
use crate::error::{ProfileError, ProfileResult};
use crate::request::ProfileRequest;
use dispgen_ocio::{BaseConfigProvider, write_config};
use dispgen_validate::{Report, RuleSet, Validator};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Validation findings; warnings only unless strict mode was off.
    pub report: Report,
    /// Merged document.
    pub document: OutputDocument,
    /// Where the document goes.
    pub output: PathBuf,
}

/// One configured generator.
pub struct Pipeline<'a> {
    rules: RuleSet,
    provider: &'a dyn BaseConfigProvider,
    strict_override: Option<bool>,
}

impl<'a> Pipeline<'a> {
    /// Pipeline with built-in rules resolving through `provider`.
    pub fn new(provider: &'a dyn BaseConfigProvider) -> Self {
        Self {
            rules: RuleSet::default(),
            provider,
            strict_override: None,
        }
    }

    /// Replaces the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Strict mode from the caller, used when the record does not set it.
    pub fn with_strict_override(mut self, strict: Option<bool>) -> Self {
        self.strict_override = strict;
        self
    }

    /// Rule set in use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Effective strict mode for `request`.
    pub fn is_strict(&self, request: &ProfileRequest) -> bool {
        request
            .strict
            .or(self.strict_override)
            .or(self.rules.strict_mode())
            .unwrap_or(false)
    }

    /// Runs the validator only.
    pub fn validate(&self, request: &ProfileRequest) -> Report {
        Validator::new(&self.rules)
            .strict(self.is_strict(request))
            .validate(&request.characterization, &request.variants)
    }

    /// Validates, then fails with [`ProfileError::ValidationRejected`] if
    /// the report holds any error.
    pub fn gate(&self, request: &ProfileRequest) -> ProfileResult<Report> {
        let report = self.validate(request);
        if report.has_errors() {
            info!(
                display = %request.characterization.name,
                errors = report.errors().count(),
                "validation rejected"
            );
            return Err(ProfileError::ValidationRejected { report });
        }
        Ok(report)
    }

    /// Gate plus assembly; nothing is written.
    pub fn generate(&self, request: &ProfileRequest) -> ProfileResult<Generated> {
        let report = self.gate(request)?;
        debug!(warnings = report.warnings().count(), "validation passed");
        let document = Assembler::new(self.provider)
            .assemble(&request.characterization, &request.variants)?;
        Ok(Generated {
            report,
            document,
            output: request.output_path(),
        })
    }

    /// [`generate`](Self::generate) and write the document to its output path.
    pub fn run(&self, request: &ProfileRequest) -> ProfileResult<Generated> {
        let generated = self.generate(request)?;
        write_config(&generated.document.config, &generated.output)?;
        info!(path = %generated.output.display(), "wrote config");
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispgen_core::{DisplayCharacterization, Eotf};
    use dispgen_ocio::BuiltinProvider;

    fn request(strict: Option<bool>) -> ProfileRequest {
        let disp = DisplayCharacterization::builder("Panel").eotf(Eotf::Gamma(5.0)).build();
        ProfileRequest::new(disp).with_strict(strict)
    }

    #[test]
    fn test_strict_precedence() {
        let provider = BuiltinProvider::new();
        let rules = RuleSet::default().with_strict_mode(Some(true));
        let p = Pipeline::new(&provider).with_rules(rules);
        assert!(p.is_strict(&request(None)));
        assert!(!p.is_strict(&request(Some(false))));

        let p = p.with_strict_override(Some(false));
        assert!(!p.is_strict(&request(None)));
        assert!(p.is_strict(&request(Some(true))));

        assert!(!Pipeline::new(&provider).is_strict(&request(None)));
    }

    #[test]
    fn test_non_strict_warns_and_proceeds() {
        let provider = BuiltinProvider::new();
        let generated = Pipeline::new(&provider).generate(&request(None)).unwrap();
        assert_eq!(generated.report.warnings().count(), 1);
        assert_eq!(generated.document.created, ["Panel - GAMMA - Display"]);
        assert_eq!(generated.output, PathBuf::from("panel_config.ocio"));
    }

    #[test]
    fn test_strict_rejects() {
        let provider = BuiltinProvider::new();
        match Pipeline::new(&provider).generate(&request(Some(true))) {
            Err(ProfileError::ValidationRejected { report }) => {
                assert_eq!(report.errors().count(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
