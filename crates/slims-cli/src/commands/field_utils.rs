//! Field and value argument parsing.

use std::str::FromStr;

use anyhow::{Result, bail};
use slims_core::{FieldGroup, FieldRef, FieldValue, SaveRecord};
use tracing::warn;

/// Resolve a field given as `group:index` or by name
pub fn resolve_field(record: &SaveRecord, arg: &str) -> Result<FieldRef> {
    if let Some((group, index)) = arg.split_once(':') {
        if let Ok(group) = FieldGroup::from_str(group.trim()) {
            let index: usize = index
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid field index '{}': {}", index, e))?;
            let field = FieldRef::new(group, index);
            record.field(field)?;
            return Ok(field);
        }
    }

    Ok(record.find_field(arg)?)
}

/// Read a field back after a write; warn and return false if the file did not take it
pub fn confirm_stored(record: &SaveRecord, field: FieldRef, expected: FieldValue) -> Result<bool> {
    let actual = record.read_field(field)?;
    if actual != expected {
        warn!(
            "{} did not change: offset is past the end of {} ({} bytes)",
            record.field(field)?.name(),
            record.path().display(),
            record.len()
        );
        return Ok(false);
    }
    Ok(true)
}

/// Parse a flag value
pub fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => bail!("Invalid flag value '{}' (expected true/false/on/off/1/0)", other),
    }
}

/// Parse an integer value, accepting `_` separators
pub fn parse_int(s: &str) -> Result<i32> {
    let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
    cleaned
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid integer '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slims_core::{ByteBuffer, GameVariant};

    fn rac1_record() -> SaveRecord {
        SaveRecord::from_buffer(ByteBuffer::from_bytes(vec![0; 700_000], "SAVE.BIN"))
    }

    #[test]
    fn test_resolve_by_name() {
        let record = rac1_record();
        assert_eq!(
            resolve_field(&record, "RYNO").unwrap(),
            FieldRef::new(FieldGroup::Weapons, 8)
        );
    }

    #[test]
    fn test_resolve_by_position() {
        let record = rac1_record();
        assert_eq!(
            resolve_field(&record, "gadgets:3").unwrap(),
            FieldRef::new(FieldGroup::Gadgets, 3)
        );
        assert!(resolve_field(&record, "gadgets:18").is_err());
        assert!(resolve_field(&record, "gadgets:x").is_err());
    }

    #[test]
    fn test_resolve_unknown() {
        let record = rac1_record();
        assert!(resolve_field(&record, "Raritanium").is_err());
        assert!(resolve_field(&record, "nothing:1").is_err());
    }

    #[test]
    fn test_confirm_stored() {
        let mut record = rac1_record();
        let bolts = record.find_field("Bolts").unwrap();
        let stored = record.write_field(bolts, FieldValue::Int(500)).unwrap();
        assert!(confirm_stored(&record, bolts, stored).unwrap());
    }

    #[test]
    fn test_confirm_stored_on_short_file() {
        let buf = ByteBuffer::from_bytes(vec![0; 16], "SHORT.BIN");
        let mut record = SaveRecord::with_variant(buf, GameVariant::Rac3);
        let bolts = record.find_field("Bolts").unwrap();
        let stored = record.write_field(bolts, FieldValue::Int(500)).unwrap();

        assert_eq!(stored, FieldValue::Int(500));
        assert!(!confirm_stored(&record, bolts, stored).unwrap());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("ON").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("999_999").unwrap(), 999_999);
        assert_eq!(parse_int("-5").unwrap(), -5);
        assert!(parse_int("lots").is_err());
    }
}
