//! Editor configuration.
//!
//! Read from `<config dir>/slims/config.toml` unless `--config` points
//! elsewhere. Every key is optional.
//!
//! ```toml
//! game = "rac2"      # skip size-based detection
//! value_step = 1000  # initial step for `adjust` on values
//! ammo_step = 10     # initial step for `adjust` on weapons
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slims_core::{DEFAULT_AMMO_STEP, DEFAULT_VALUE_STEP, FieldGroup, GameVariant};

const CONFIG_DIR: &str = "slims";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Game to bind instead of detecting from file size
    pub game: Option<GameVariant>,
    pub value_step: i32,
    pub ammo_step: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: None,
            value_step: DEFAULT_VALUE_STEP,
            ammo_step: DEFAULT_AMMO_STEP,
        }
    }
}

impl Config {
    /// Default config location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Initial `adjust` step for a field group
    pub fn step_for(&self, group: FieldGroup) -> i32 {
        match group {
            FieldGroup::Weapons => self.ammo_step,
            _ => self.value_step,
        }
    }
}
