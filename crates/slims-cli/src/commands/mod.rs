//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod adjust;
pub mod field_utils;
pub mod fix_checksum;
pub mod get;
pub mod hex_utils;
pub mod hexdump;
pub mod info;
pub mod list;
pub mod scan;
pub mod set;
pub mod toggle;

use std::path::Path;

use anyhow::{Context, Result};
use slims_core::{GameVariant, SaveRecord};
use tracing::info;

/// Load a save file, binding `game` if given instead of detecting it
pub fn open_record(path: &Path, game: Option<GameVariant>) -> Result<SaveRecord> {
    let record = match game {
        Some(variant) => {
            info!("Using {} (forced)", variant.display_name());
            SaveRecord::load_as(path, variant)
        }
        None => SaveRecord::load(path),
    }
    .with_context(|| format!("Could not open {}", path.display()))?;

    Ok(record)
}

/// Save a record, reporting where it went
pub fn save_record(record: &mut SaveRecord) -> Result<()> {
    record
        .save()
        .with_context(|| format!("Could not save {}", record.path().display()))?;
    eprintln!(
        "Saved {} (checksum 0x{:08X})",
        record.path().display(),
        record.checksum().stored_value
    );
    Ok(())
}
