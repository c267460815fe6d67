//! Validate command: report only, nothing is written.

use crate::ValidateArgs;
use anyhow::{Result, bail};
use dispgen_ocio::BuiltinProvider;
use dispgen_profile::Pipeline;

/// Runs the validate command.
///
/// Fails when the report holds errors, which only happens in strict mode.
pub fn run(args: ValidateArgs) -> Result<()> {
    let request = super::load_request(&args.input.config)?;
    let rules = super::load_rules(&args.input.rules)?;
    let provider = BuiltinProvider::new();
    let pipeline = Pipeline::new(&provider)
        .with_rules(rules)
        .with_strict_override(args.input.strict.then_some(true));

    let strict = pipeline.is_strict(&request);
    let report = pipeline.validate(&request);

    println!(
        "{} ({} mode)",
        request.characterization.name,
        if strict { "strict" } else { "lenient" }
    );
    super::print_report(&report);

    if report.has_errors() {
        bail!("validation failed with {} error(s)", report.errors().count());
    }
    println!("Validation passed ({} warning(s))", report.warnings().count());
    Ok(())
}
