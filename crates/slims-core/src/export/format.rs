use super::FieldSnapshot;

/// Line-oriented rendering of captured fields, used by `slims list`
pub trait ExportFormat {
    /// Column titles, if the layout has any
    fn header(&self) -> Option<String>;

    fn format_row(&self, field: &FieldSnapshot) -> String;

    /// Header (when present) followed by one line per field, each newline-terminated
    fn format_rows(&self, fields: &[FieldSnapshot]) -> String {
        self.header()
            .into_iter()
            .chain(fields.iter().map(|field| self.format_row(field)))
            .map(|line| line + "\n")
            .collect()
    }
}
