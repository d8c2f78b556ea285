//! A loaded save file bound to the schema of its game.
//!
//! `SaveRecord` is the entry point for editing: it owns the buffer, borrows
//! the static schema picked for it, and tracks the checksum state. All
//! field access goes through [`FieldRef`]s resolved against the bound
//! schema, and integer writes are clamped to the field's declared range.
//!
//! ```ignore
//! use slims_core::{FieldGroup, FieldRef, FieldValue, SaveRecord};
//!
//! let mut record = SaveRecord::load("SAVE0.BIN")?;
//! let bolts = record.find_field("Bolts")?;
//! record.write_field(bolts, FieldValue::Int(5_000_000))?;
//! record.save()?;
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::buffer::{ByteBuffer, ChecksumDescriptor};
use crate::error::{Error, Result};
use crate::game::{FieldDescriptor, FieldGroup, FieldRef, FieldValue, GameSchema, GameVariant};

#[derive(Debug)]
pub struct SaveRecord {
    buffer: ByteBuffer,
    schema: &'static GameSchema,
    checksum: ChecksumDescriptor,
}

impl SaveRecord {
    /// Load a save file and pick its schema from the file size
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_buffer(ByteBuffer::load(path)?))
    }

    /// Load a save file with an explicitly chosen game
    pub fn load_as<P: AsRef<Path>>(path: P, variant: GameVariant) -> Result<Self> {
        Ok(Self::with_variant(ByteBuffer::load(path)?, variant))
    }

    pub fn from_buffer(buffer: ByteBuffer) -> Self {
        let variant = GameVariant::detect(buffer.len());
        debug!("Detected {} from size {}", variant, buffer.len());
        Self::with_variant(buffer, variant)
    }

    pub fn with_variant(buffer: ByteBuffer, variant: GameVariant) -> Self {
        let checksum = ChecksumDescriptor::detect(&buffer);
        let schema = GameSchema::for_variant(variant);
        info!(
            "Bound {} to {} (checksum {})",
            buffer.path().display(),
            schema.display_name,
            if checksum.is_valid { "ok" } else { "mismatch" }
        );

        Self {
            buffer,
            schema,
            checksum,
        }
    }

    /// Bind a different schema to the same buffer
    pub fn rebind(&mut self, variant: GameVariant) {
        if self.schema.variant != variant {
            info!("Rebinding {} -> {}", self.schema.variant, variant);
            self.schema = GameSchema::for_variant(variant);
        }
    }

    pub fn variant(&self) -> GameVariant {
        self.schema.variant
    }

    pub fn display_name(&self) -> &'static str {
        self.schema.display_name
    }

    pub fn schema(&self) -> &'static GameSchema {
        self.schema
    }

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    pub fn path(&self) -> &Path {
        self.buffer.path()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    pub fn checksum(&self) -> &ChecksumDescriptor {
        &self.checksum
    }

    /// Result of the last checksum validation (load or recalculation)
    pub fn is_checksum_valid(&self) -> bool {
        self.checksum.is_valid
    }

    /// Re-validate the checksum against the current content
    pub fn verify_checksum(&mut self) -> bool {
        self.checksum.is_valid = self.checksum.validate(&self.buffer);
        self.checksum.is_valid
    }

    pub fn recalculate_checksum(&mut self) -> u32 {
        self.checksum.recalculate(&mut self.buffer)
    }

    /// Fields of a group in schema order
    pub fn list_fields(&self, group: FieldGroup) -> Vec<FieldDescriptor> {
        self.schema.fields(group)
    }

    pub fn field(&self, field: FieldRef) -> Result<FieldDescriptor> {
        self.schema
            .field(field)
            .ok_or(Error::FieldIndexOutOfRange {
                group: field.group,
                index: field.index,
                len: self.schema.len(field.group),
            })
    }

    pub fn find_field(&self, name: &str) -> Result<FieldRef> {
        self.schema
            .find(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Current value of a field, unclamped
    pub fn read(&self, field: &FieldDescriptor) -> FieldValue {
        match field {
            FieldDescriptor::Value(f) | FieldDescriptor::Weapon(f) => {
                FieldValue::Int(self.buffer.read(f.offset, f.width))
            }
            FieldDescriptor::Gadget(f) | FieldDescriptor::Unlockable(f) => {
                FieldValue::Flag(self.buffer.read_bit(f.offset, f.bit))
            }
        }
    }

    pub fn read_field(&self, field: FieldRef) -> Result<FieldValue> {
        Ok(self.read(&self.field(field)?))
    }

    /// Write a field and return what was stored.
    ///
    /// Integers are clamped to the field's range; flags only touch their bit.
    pub fn write_field(&mut self, field: FieldRef, value: FieldValue) -> Result<FieldValue> {
        let descriptor = self.field(field)?;
        match (descriptor, value) {
            (FieldDescriptor::Value(f) | FieldDescriptor::Weapon(f), FieldValue::Int(v)) => {
                let clamped = f.clamp(v);
                if clamped != v {
                    debug!("Clamped {} from {} to {}", f.name, v, clamped);
                }
                self.buffer.write(f.offset, f.width, clamped);
                Ok(FieldValue::Int(clamped))
            }
            (FieldDescriptor::Gadget(f) | FieldDescriptor::Unlockable(f), FieldValue::Flag(v)) => {
                self.buffer.write_bit(f.offset, f.bit, v);
                Ok(FieldValue::Flag(v))
            }
            (d, FieldValue::Flag(_)) => Err(Error::FieldKindMismatch {
                field: d.name().to_string(),
                expected: "integer",
            }),
            (d, FieldValue::Int(_)) => Err(Error::FieldKindMismatch {
                field: d.name().to_string(),
                expected: "boolean",
            }),
        }
    }

    pub fn set_int(&mut self, field: FieldRef, value: i32) -> Result<i32> {
        let stored = self.write_field(field, FieldValue::Int(value))?;
        Ok(stored.as_int().unwrap_or(value))
    }

    pub fn set_flag(&mut self, field: FieldRef, value: bool) -> Result<()> {
        self.write_field(field, FieldValue::Flag(value))?;
        Ok(())
    }

    /// Flip a flag and return its new state
    pub fn toggle_flag(&mut self, field: FieldRef) -> Result<bool> {
        let current = match self.read_field(field)? {
            FieldValue::Flag(v) => v,
            FieldValue::Int(_) => {
                return Err(Error::FieldKindMismatch {
                    field: self.field(field)?.name().to_string(),
                    expected: "boolean",
                });
            }
        };
        self.set_flag(field, !current)?;
        Ok(!current)
    }

    /// Recalculate the checksum (if any) and write the file back.
    ///
    /// A failed write keeps the record marked modified.
    pub fn save(&mut self) -> Result<()> {
        if self.checksum.offset.is_some() {
            self.recalculate_checksum();
        }
        self.buffer.save()
    }
}
