//! Record listing and export.
//!
//! - **Snapshot**: serializable capture of a record's checksum state and fields
//! - **Formats**: TSV and aligned-text listings via [`ExportFormat`]

mod format;
mod snapshot;
mod tsv;

pub use format::ExportFormat;
pub use snapshot::{ChecksumSnapshot, FieldSnapshot, RecordSnapshot};
pub use tsv::{TextExporter, TsvExporter};
