//! Fix-checksum command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use slims_core::GameVariant;

use super::{open_record, save_record};

/// Run the fix-checksum command
pub fn run(file: &Path, game: Option<GameVariant>) -> Result<()> {
    let mut record = open_record(file, game)?;

    let Some(offset) = record.checksum().offset else {
        bail!("{} is too short to carry a checksum", file.display());
    };

    let before = record.checksum().stored_value;
    let after = record.recalculate_checksum();
    if before == after {
        println!("Checksum at 0x{:X} already valid (0x{:08X})", offset, after);
        return Ok(());
    }

    println!(
        "Checksum at 0x{:X}: 0x{:08X} -> 0x{:08X}",
        offset, before, after
    );
    save_record(&mut record)
}
