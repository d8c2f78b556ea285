//! Info command implementation.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use slims_core::{FieldGroup, GameVariant};

use super::hex_utils::format_hex_offset;
use super::open_record;

/// Run the info command
pub fn run(file: &Path, game: Option<GameVariant>) -> Result<()> {
    let record = open_record(file, game)?;

    println!("File:     {}", record.path().display());
    println!("Size:     {} bytes", record.len());
    println!(
        "Game:     {} ({}){}",
        record.display_name(),
        record.variant(),
        if game.is_some() { " [forced]" } else { "" }
    );

    let checksum = record.checksum();
    match checksum.offset {
        Some(offset) if checksum.is_valid => println!(
            "Checksum: 0x{:08X} at {} {}",
            checksum.stored_value,
            format_hex_offset(offset),
            "valid".green()
        ),
        Some(offset) => println!(
            "Checksum: 0x{:08X} at {} {} (computed 0x{:08X})",
            checksum.stored_value,
            format_hex_offset(offset),
            "MISMATCH".red(),
            checksum.computed(record.buffer()).unwrap_or_default()
        ),
        None => println!("Checksum: none (file shorter than 8 bytes)"),
    }

    let schema = record.schema();
    let counts: Vec<String> = FieldGroup::ALL
        .iter()
        .map(|&group| format!("{} {}", group, schema.len(group)))
        .collect();
    println!("Fields:   {}", counts.join(", "));

    if !record.variant().is_known() {
        println!(
            "{}",
            "Game not recognised from file size; use --game to pick one".yellow()
        );
    }

    Ok(())
}
