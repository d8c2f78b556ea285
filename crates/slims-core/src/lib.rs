//! # slims-core
//!
//! Core library for the slims save editor.
//!
//! This crate provides:
//! - An in-memory save buffer with bounds-checked typed accessors
//! - Trailing CRC32 checksum validation and repair
//! - Static per-game field schemas and size-based game detection
//! - `SaveRecord`, which binds a buffer to its schema for named field editing
//! - Step-based value editing, save discovery and record export
//!
//! ## Feature Flags
//!
//! - `debug-tools`: Enables hexdump formatting for inspecting raw save data.
//!   This feature is intended for CLI tools and development.

pub mod buffer;
#[cfg(feature = "debug-tools")]
pub mod debug;
pub mod discover;
pub mod edit;
pub mod error;
pub mod export;
pub mod game;
pub mod record;

pub use buffer::{ByteBuffer, ByteWidth, ChecksumDescriptor};
pub use discover::{SaveEntry, discover_saves};
pub use edit::{DEFAULT_AMMO_STEP, DEFAULT_VALUE_STEP, ValueEditor, default_step};
pub use error::{Error, Result};
pub use export::{
    ChecksumSnapshot, ExportFormat, FieldSnapshot, RecordSnapshot, TextExporter, TsvExporter,
};
pub use game::{
    BitFlag, FieldDescriptor, FieldGroup, FieldRef, FieldValue, GameSchema, GameVariant,
    ScalarField, WeaponAmmo,
};
pub use record::SaveRecord;

// Debug utilities (requires debug-tools feature)
#[cfg(feature = "debug-tools")]
pub use debug::format_hexdump;
