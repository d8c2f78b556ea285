//! Set command implementation.

use std::path::Path;

use anyhow::Result;
use slims_core::{FieldValue, GameVariant};

use super::field_utils::{confirm_stored, parse_flag, parse_int, resolve_field};
use super::{open_record, save_record};

/// Run the set command
pub fn run(file: &Path, game: Option<GameVariant>, field: &str, value: &str) -> Result<()> {
    let mut record = open_record(file, game)?;
    let field = resolve_field(&record, field)?;
    let descriptor = record.field(field)?;

    let requested = if field.group.is_flag() {
        FieldValue::Flag(parse_flag(value)?)
    } else {
        FieldValue::Int(parse_int(value)?)
    };

    let before = record.read(&descriptor);
    let stored = record.write_field(field, requested)?;
    if stored != requested {
        println!(
            "{}: {} -> {} (clamped from {})",
            descriptor.name(),
            before,
            stored,
            requested
        );
    } else {
        println!("{}: {} -> {}", descriptor.name(), before, stored);
    }
    confirm_stored(&record, field, stored)?;

    save_record(&mut record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slims_core::{FieldGroup, FieldRef, SaveRecord};

    #[test]
    fn test_set_clamps_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SAVE.BIN");
        std::fs::write(&path, vec![0u8; 700_000]).unwrap();

        run(&path, None, "Bolts", "5000000").unwrap();
        run(&path, None, "unlockables:0", "on").unwrap();

        let record = SaveRecord::load(&path).unwrap();
        assert!(record.is_checksum_valid());
        assert_eq!(
            record.read_field(FieldRef::new(FieldGroup::Values, 0)).unwrap(),
            FieldValue::Int(999_999)
        );
        assert_eq!(record.buffer().read_u8(449), 1);
    }

    #[test]
    fn test_set_on_short_file_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SHORT.BIN");
        std::fs::write(&path, vec![0u8; 16]).unwrap();

        run(&path, Some(GameVariant::Rac3), "Bolts", "500").unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len(), 16);
        assert!(data[..12].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_rejects_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SAVE.BIN");
        std::fs::write(&path, vec![0u8; 700_000]).unwrap();

        assert!(run(&path, None, "Heli-Pack", "12").is_err());
        assert!(run(&path, None, "Bolts", "many").is_err());
        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; 700_000]);
    }
}
