//! dispgen - display characterization to OCIO config generator
//!
//! Reads measured display data, validates it and merges display color
//! spaces into a base OCIO config.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dispgen")]
#[command(author, version, about = "Display characterization to OCIO config generator")]
#[command(long_about = "
Builds OCIO display color spaces from measured display data and merges
them into a base config.

Examples:
  dispgen generate                           # display_config.yaml -> <name>_config.ocio
  dispgen generate -c oled.yaml -o oled.ocio --strict
  dispgen validate -c oled.yaml -r validation_settings.yaml
  dispgen inspect -c oled.yaml               # matrices, white point, coverage
  dispgen bases                              # known base configs
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the display and write the OCIO config
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Run validation rules and print the report
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),

    /// Print derived colorimetry for the display
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// List the base configs that can be resolved
    Bases,
}

/// Display config and rule file shared by the commands that validate.
#[derive(Args)]
struct InputArgs {
    /// Display config YAML
    #[arg(short, long, default_value = dispgen_profile::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Validation rules YAML (missing file falls back to built-in rules)
    #[arg(short, long, default_value = dispgen_validate::DEFAULT_RULES_FILE)]
    rules: PathBuf,

    /// Escalate every finding to an error unless the display config sets strict_mode
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `generate` command.
#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output config path (overrides ocio.output_config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Args)]
struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for the `inspect` command.
#[derive(Args)]
struct InspectArgs {
    /// Display config YAML
    #[arg(short, long, default_value = dispgen_profile::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Bases => commands::bases::run(),
    }
}
