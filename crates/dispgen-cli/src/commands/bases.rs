//! Bases command: list resolvable base configs.

use anyhow::Result;
use dispgen_core::{BaseConfigSelector, OCIO_SCHEME};
use dispgen_ocio::BuiltinProvider;

/// Runs the bases command.
pub fn run() -> Result<()> {
    let default_key = BaseConfigSelector::default().key();
    for key in BuiltinProvider::new().known_keys() {
        let marker = if key == default_key { " (default)" } else { "" };
        println!("{OCIO_SCHEME}{key}{marker}");
    }
    Ok(())
}
