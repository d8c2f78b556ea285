use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::game::{FieldDescriptor, FieldGroup, FieldValue, GameVariant};
use crate::record::SaveRecord;

/// Checksum state at capture time
#[derive(Debug, Clone, Serialize)]
pub struct ChecksumSnapshot {
    pub offset: Option<usize>,
    pub stored: u32,
    pub computed: Option<u32>,
    pub valid: bool,
}

/// One field and its current value
#[derive(Debug, Clone, Serialize)]
pub struct FieldSnapshot {
    pub group: FieldGroup,
    pub index: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub offset: usize,
    pub value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit: Option<u8>,
}

impl FieldSnapshot {
    fn capture(record: &SaveRecord, index: usize, field: &FieldDescriptor) -> Self {
        let scalar = field.as_scalar();
        Self {
            group: field.group(),
            index,
            name: field.name(),
            description: field.description(),
            offset: field.offset(),
            value: record.read(field),
            min: scalar.map(|f| f.min),
            max: scalar.map(|f| f.max),
            bit: field.as_flag().map(|f| f.bit),
        }
    }

    /// Range column text: `min..=max` for integers, `bit N` for flags
    pub fn range_label(&self) -> String {
        match (self.min, self.max, self.bit) {
            (Some(min), Some(max), _) => format!("{}..={}", min, max),
            (_, _, Some(bit)) => format!("bit {}", bit),
            _ => String::new(),
        }
    }
}

/// Serializable view of a whole record
#[derive(Debug, Clone, Serialize)]
pub struct RecordSnapshot {
    pub path: PathBuf,
    pub game: GameVariant,
    pub game_name: &'static str,
    pub len: usize,
    pub modified: bool,
    pub checksum: ChecksumSnapshot,
    pub fields: Vec<FieldSnapshot>,
}

impl RecordSnapshot {
    /// Capture every group
    pub fn capture(record: &SaveRecord) -> Self {
        Self::capture_groups(record, &FieldGroup::ALL)
    }

    /// Capture only the given groups, in the order given
    pub fn capture_groups(record: &SaveRecord, groups: &[FieldGroup]) -> Self {
        let checksum = record.checksum();
        let fields = groups
            .iter()
            .flat_map(|&group| {
                record
                    .list_fields(group)
                    .iter()
                    .enumerate()
                    .map(|(index, field)| FieldSnapshot::capture(record, index, field))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            path: record.path().to_path_buf(),
            game: record.variant(),
            game_name: record.display_name(),
            len: record.len(),
            modified: record.is_modified(),
            checksum: ChecksumSnapshot {
                offset: checksum.offset,
                stored: checksum.stored_value,
                computed: checksum.computed(record.buffer()),
                valid: checksum.is_valid,
            },
            fields,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ByteBuffer;

    fn rac2_record() -> SaveRecord {
        let mut buf = ByteBuffer::from_bytes(vec![0; 900_000], "SAVE2.BIN");
        buf.write_i32(36, 42);
        buf.write_u8(658, 1);
        SaveRecord::from_buffer(buf)
    }

    #[test]
    fn test_capture_all_groups() {
        let record = rac2_record();
        let snapshot = RecordSnapshot::capture(&record);

        assert_eq!(snapshot.game, GameVariant::Rac2);
        assert_eq!(snapshot.len, 900_000);
        assert_eq!(snapshot.checksum.offset, Some(899_996));
        assert_eq!(snapshot.fields.len(), 2 + 21 + 19 + 23);

        let bolts = &snapshot.fields[0];
        assert_eq!(bolts.name, "Bolts");
        assert_eq!(bolts.value, FieldValue::Int(42));
        assert_eq!(bolts.range_label(), "0..=9999999");

        let heli = snapshot
            .fields
            .iter()
            .find(|f| f.group == FieldGroup::Gadgets && f.index == 0)
            .unwrap();
        assert_eq!(heli.value, FieldValue::Flag(true));
        assert_eq!(heli.range_label(), "bit 0");
    }

    #[test]
    fn test_capture_selected_groups() {
        let record = rac2_record();
        let snapshot = RecordSnapshot::capture_groups(&record, &[FieldGroup::Values]);
        assert_eq!(snapshot.fields.len(), 2);
        assert!(snapshot.fields.iter().all(|f| f.group == FieldGroup::Values));
    }

    #[test]
    fn test_to_json() {
        let record = rac2_record();
        let json = RecordSnapshot::capture_groups(&record, &[FieldGroup::Values])
            .to_json()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["game"], "rac2");
        assert_eq!(parsed["game_name"], "Ratchet & Clank 2 HD");
        assert_eq!(parsed["fields"][0]["value"], 42);
        assert_eq!(parsed["fields"][0]["group"], "values");
        assert!(parsed["fields"][0].get("bit").is_none());
    }
}
