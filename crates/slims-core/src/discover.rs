//! Save file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::game::GameVariant;

/// A candidate save file found in a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveEntry {
    pub path: PathBuf,
    pub name: String,
    pub len: u64,
    pub variant: GameVariant,
}

/// List the regular files of `dir` (not recursive), sorted by name, with the
/// game each one would be detected as.
pub fn discover_saves<P: AsRef<Path>>(dir: P) -> Result<Vec<SaveEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let len = metadata.len();
        entries.push(SaveEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            len,
            variant: GameVariant::detect(usize::try_from(len).unwrap_or(usize::MAX)),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
