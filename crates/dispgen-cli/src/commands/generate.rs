//! Generate command: validate, merge into the base config, write.

use crate::GenerateArgs;
use anyhow::{Context, Result, bail};
use dispgen_ocio::BuiltinProvider;
use dispgen_profile::{Pipeline, ProfileError, ProfileRequest};
use std::path::Path;

/// Runs the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let mut request = super::load_request(&args.input.config)?;
    if let Some(output) = args.output {
        request.output = Some(output);
    }
    let rules = super::load_rules(&args.input.rules)?;
    let provider = BuiltinProvider::new();
    let pipeline = Pipeline::new(&provider)
        .with_rules(rules)
        .with_strict_override(args.input.strict.then_some(true));

    print_summary(&request);

    let generated = match pipeline.run(&request) {
        Ok(generated) => generated,
        Err(ProfileError::ValidationRejected { report }) => {
            println!("\nValidation failed (strict mode):");
            super::print_report(&report);
            bail!("{} validation error(s)", report.errors().count());
        }
        Err(ProfileError::BaseConfigUnresolved { key, known }) => {
            eprintln!("Attempted base config: {}{key}", dispgen_core::OCIO_SCHEME);
            eprintln!("Available base configs:");
            for k in &known {
                eprintln!("  - {}{k}", dispgen_core::OCIO_SCHEME);
            }
            bail!("unknown base config '{key}'");
        }
        Err(err) => return Err(err).context("Failed to create OCIO config"),
    };

    if !generated.report.is_empty() {
        println!("\nValidation warnings:");
        super::print_report(&generated.report);
    }

    let created = &generated.document.created;
    println!("\nCreated OCIO config");
    println!("  Output file:         {}", generated.output.display());
    println!("  Colorspaces created: {}", created.len());
    for name in created {
        println!("    - {name}");
    }
    for issue in &generated.document.issues {
        println!("  {issue}");
    }

    let abs = std::path::absolute(&generated.output)
        .with_context(|| format!("Failed to resolve {}", generated.output.display()))?;
    print_usage(&abs);
    Ok(())
}

fn print_summary(request: &ProfileRequest) {
    let disp = &request.characterization;
    println!("Display:        {}", disp.name);
    println!("Peak luminance: {} cd/m²", disp.luminance.peak_luminance);
    println!("Black level:    {} cd/m²", disp.luminance.black_level);
    println!("Contrast ratio: {:.0}:1", disp.luminance.contrast_ratio());
    println!("EOTF:           {}", disp.eotf);
    println!("Gamut mapping:  {}", disp.gamut_mapping);
    println!("Base config:    {}", disp.base_config.uri());
}

fn print_usage(abs: &Path) {
    println!("\nUsage:");
    println!("  export OCIO={}", abs.display());
    println!("  then select one of the display colorspaces above in your application");
}
