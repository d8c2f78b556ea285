//! Step-based numeric editing session.
//!
//! Mirrors the on-screen number editor: the value moves by a power-of-ten
//! step, the step cycles between 1 and 1,000,000, and the value never leaves
//! the field's declared range while editing. Nothing is written until the
//! session is committed.

use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{FieldGroup, FieldRef};
use crate::record::SaveRecord;

pub const MIN_STEP: i32 = 1;
pub const MAX_STEP: i32 = 1_000_000;

/// Default step when editing the values group
pub const DEFAULT_VALUE_STEP: i32 = 1_000;
/// Default step when editing ammo
pub const DEFAULT_AMMO_STEP: i32 = 10;

/// Default step for a group
pub fn default_step(group: FieldGroup) -> i32 {
    match group {
        FieldGroup::Weapons => DEFAULT_AMMO_STEP,
        _ => DEFAULT_VALUE_STEP,
    }
}

/// Largest power of ten in `[MIN_STEP, MAX_STEP]` not above `step`
fn snap_step(step: i32) -> i32 {
    let mut snapped = MIN_STEP;
    while snapped < MAX_STEP && snapped * 10 <= step {
        snapped *= 10;
    }
    snapped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEditor {
    field: FieldRef,
    name: &'static str,
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl ValueEditor {
    /// Start editing an integer field at its current value
    pub fn begin(record: &SaveRecord, field: FieldRef, step: i32) -> Result<Self> {
        let descriptor = record.field(field)?;
        let Some(scalar) = descriptor.as_scalar() else {
            return Err(Error::FieldKindMismatch {
                field: descriptor.name().to_string(),
                expected: "integer",
            });
        };

        let value = record.buffer().read(scalar.offset, scalar.width);
        Ok(Self {
            field,
            name: scalar.name,
            value,
            min: scalar.min,
            max: scalar.max,
            step: snap_step(step),
        })
    }

    pub fn field(&self) -> FieldRef {
        self.field
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Multiply the step by ten, wrapping back to 1 after 1,000,000
    pub fn step_up(&mut self) {
        self.step = if self.step >= MAX_STEP {
            MIN_STEP
        } else {
            self.step * 10
        };
    }

    /// Divide the step by ten, wrapping to 1,000,000 below 1
    pub fn step_down(&mut self) {
        self.step = if self.step <= MIN_STEP {
            MAX_STEP
        } else {
            self.step / 10
        };
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(self.step).min(self.max);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(self.step).max(self.min);
    }

    pub fn set_min(&mut self) {
        self.value = self.min;
    }

    pub fn set_max(&mut self) {
        self.value = self.max;
    }

    /// Write the edited value and return what was stored
    pub fn commit(self, record: &mut SaveRecord) -> Result<i32> {
        debug!("Committing {} = {}", self.name, self.value);
        record.set_int(self.field, self.value)
    }

    /// Abandon the edit without writing
    pub fn cancel(self) {
        debug!("Cancelled edit of {}", self.name);
    }
}
