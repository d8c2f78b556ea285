//! Scan command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use slims_core::discover_saves;

/// Run the scan command
pub fn run(dir: &Path) -> Result<()> {
    let entries = discover_saves(dir)
        .with_context(|| format!("Could not read {}", dir.display()))?;

    if entries.is_empty() {
        println!("No files in {}", dir.display());
        return Ok(());
    }

    for entry in &entries {
        let game = entry.variant.display_name();
        if entry.variant.is_known() {
            println!("{:<32} {:>10}  {}", entry.name, entry.len, game.green());
        } else {
            println!("{:<32} {:>10}  {}", entry.name, entry.len, game.dimmed());
        }
    }

    Ok(())
}
