//! CLI command implementations

pub mod bases;
pub mod generate;
pub mod inspect;
pub mod validate;

use anyhow::{Context, Result};
use dispgen_profile::ProfileRequest;
use dispgen_validate::{Report, RuleSet};
use std::path::Path;
use tracing::debug;

/// Load and convert the display config.
pub fn load_request(path: &Path) -> Result<ProfileRequest> {
    let request = ProfileRequest::load(path)
        .with_context(|| format!("Failed to load display config: {}", path.display()))?;
    debug!(
        display = %request.characterization.name,
        base = %request.characterization.base_config.key(),
        "loaded display config"
    );
    Ok(request)
}

/// Load the rule set; a missing file yields the built-in rules.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    RuleSet::load(path).with_context(|| format!("Failed to load validation rules: {}", path.display()))
}

/// Print every finding, one per line.
pub fn print_report(report: &Report) {
    for finding in report.findings() {
        println!("  {finding}");
    }
}
