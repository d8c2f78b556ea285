//! Get command implementation.

use std::path::Path;

use anyhow::Result;
use slims_core::GameVariant;

use super::field_utils::resolve_field;
use super::open_record;

/// Run the get command
pub fn run(file: &Path, game: Option<GameVariant>, field: &str) -> Result<()> {
    let record = open_record(file, game)?;
    let field = resolve_field(&record, field)?;
    let descriptor = record.field(field)?;

    println!(
        "{} ({}) = {}",
        descriptor.name(),
        field,
        record.read(&descriptor)
    );

    Ok(())
}
