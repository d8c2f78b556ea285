//! Toggle command implementation.

use std::path::Path;

use anyhow::Result;
use slims_core::{FieldValue, GameVariant};

use super::field_utils::{confirm_stored, resolve_field};
use super::{open_record, save_record};

/// Run the toggle command
pub fn run(file: &Path, game: Option<GameVariant>, field: &str) -> Result<()> {
    let mut record = open_record(file, game)?;
    let field = resolve_field(&record, field)?;
    let name = record.field(field)?.name();

    let owned = record.toggle_flag(field)?;
    println!("{}: {}", name, if owned { "owned" } else { "not owned" });
    confirm_stored(&record, field, FieldValue::Flag(owned))?;

    save_record(&mut record)
}
