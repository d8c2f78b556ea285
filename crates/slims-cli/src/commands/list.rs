//! List command implementation.

use std::path::Path;

use anyhow::Result;
use slims_core::{ExportFormat, FieldGroup, GameVariant, RecordSnapshot, TextExporter, TsvExporter};

use super::open_record;
use crate::cli::ListFormat;

/// Run the list command
pub fn run(
    file: &Path,
    game: Option<GameVariant>,
    group: Option<FieldGroup>,
    format: ListFormat,
) -> Result<()> {
    let record = open_record(file, game)?;

    let snapshot = match group {
        Some(group) => RecordSnapshot::capture_groups(&record, &[group]),
        None => RecordSnapshot::capture(&record),
    };

    match format {
        ListFormat::Json => println!("{}", snapshot.to_json()?),
        ListFormat::Tsv => print!("{}", TsvExporter.format_rows(&snapshot.fields)),
        ListFormat::Text => {
            println!("{} - {}", snapshot.game_name, record.path().display());
            if snapshot.fields.is_empty() {
                println!("(no fields)");
            } else {
                print!("{}", TextExporter.format_rows(&snapshot.fields));
            }
        }
    }

    Ok(())
}
