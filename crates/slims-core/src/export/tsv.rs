use super::{ExportFormat, FieldSnapshot};

/// Tab-separated listing, one field per line
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(["Group", "Index", "Name", "Offset", "Value", "Range", "Description"].join("\t"))
    }

    fn format_row(&self, field: &FieldSnapshot) -> String {
        format!(
            "{}\t{}\t{}\t0x{:X}\t{}\t{}\t{}",
            field.group,
            field.index,
            field.name,
            field.offset,
            field.value,
            field.range_label(),
            field.description
        )
    }
}

/// Column-aligned listing for terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl ExportFormat for TextExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, field: &FieldSnapshot) -> String {
        let group: &'static str = field.group.into();
        format!(
            "{:>11}:{:<3} {:<26} @ 0x{:04X}  {:>12}  {}",
            group,
            field.index,
            field.name,
            field.offset,
            field.value.to_string(),
            field.range_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ByteBuffer;
    use crate::export::RecordSnapshot;
    use crate::game::FieldGroup;
    use crate::record::SaveRecord;

    fn rac1_fields() -> Vec<FieldSnapshot> {
        let mut buf = ByteBuffer::from_bytes(vec![0; 700_000], "SAVE.BIN");
        buf.write_i32(36, 1234);
        let record = SaveRecord::from_buffer(buf);
        RecordSnapshot::capture_groups(&record, &[FieldGroup::Values, FieldGroup::Gadgets]).fields
    }

    #[test]
    fn test_tsv_rows() {
        let fields = rac1_fields();
        let output = TsvExporter.format_rows(&fields);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 1 + 1 + 18);
        assert!(lines[0].starts_with("Group\tIndex\tName"));
        assert_eq!(
            lines[1],
            "values\t0\tBolts\t0x24\t1234\t0..=999999\tCurrent bolt count"
        );
        assert_eq!(
            lines[2],
            "gadgets\t0\tHeli-Pack\t0x1BA\tnot owned\tbit 0\tHelicopter backpack"
        );
    }

    #[test]
    fn test_text_rows_have_no_header() {
        let fields = rac1_fields();
        let output = TextExporter.format_rows(&fields);
        assert_eq!(output.lines().count(), 19);
        assert!(output.lines().next().unwrap().contains("Bolts"));
    }
}
