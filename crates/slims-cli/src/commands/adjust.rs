//! Adjust command implementation.
//!
//! Runs a [`ValueEditor`] session non-interactively: optionally jump to a
//! bound, then apply the requested number of steps, then commit.

use std::path::Path;

use anyhow::Result;
use slims_core::{FieldValue, GameVariant, ValueEditor};

use super::field_utils::{confirm_stored, resolve_field};
use super::{open_record, save_record};
use crate::config::Config;

/// How to move the value
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjustment {
    pub up: u32,
    pub down: u32,
    pub to_min: bool,
    pub to_max: bool,
    pub step: Option<i32>,
}

/// Run the adjust command
pub fn run(
    file: &Path,
    game: Option<GameVariant>,
    field: &str,
    adjustment: Adjustment,
    config: &Config,
) -> Result<()> {
    let mut record = open_record(file, game)?;
    let field = resolve_field(&record, field)?;
    let step = adjustment.step.unwrap_or_else(|| config.step_for(field.group));

    let mut editor = ValueEditor::begin(&record, field, step)?;
    let before = editor.value();

    if adjustment.to_min {
        editor.set_min();
    }
    if adjustment.to_max {
        editor.set_max();
    }
    for _ in 0..adjustment.up {
        editor.increment();
    }
    for _ in 0..adjustment.down {
        editor.decrement();
    }

    let (min, max) = editor.range();
    let name = editor.name();
    let step = editor.step();
    let stored = editor.commit(&mut record)?;
    println!(
        "{}: {} -> {} (step {}, range {}..={})",
        name, before, stored, step, min, max
    );
    confirm_stored(&record, field, FieldValue::Int(stored))?;

    save_record(&mut record)
}
