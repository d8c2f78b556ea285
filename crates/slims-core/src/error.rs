use std::path::PathBuf;

use thiserror::Error;

use crate::game::FieldGroup;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Save file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read save file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write save file {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field index {index} out of range for {group} ({len} fields)")]
    FieldIndexOutOfRange {
        group: FieldGroup,
        index: usize,
        len: usize,
    },

    #[error("Field '{field}' expects a {expected} value")]
    FieldKindMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Load { source, .. } | Error::Save { source, .. } | Error::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Wrap an IO error raised while loading `path`
    pub(crate) fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(path)
        } else {
            Error::Load { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let err = Error::load(
            "missing.bin",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.is_not_found());

        let err2 = Error::load(
            "locked.bin",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err2, Error::Load { .. }));
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_error_display_mentions_path() {
        let err = Error::NotFound(PathBuf::from("saves/SAVE0.BIN"));
        assert!(err.to_string().contains("SAVE0.BIN"));
    }
}
