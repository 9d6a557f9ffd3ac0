//! Error types for task-index.
//!
//! Only run-level failures are errors. Problems with an individual export
//! file degrade that file's record instead of surfacing here.

use std::path::PathBuf;

/// Error type for indexing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The export root does not exist.
    #[error("Export directory not found: {}", .0.display())]
    ExportDirNotFound(PathBuf),

    /// Reading or writing a path failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the JSON index failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for indexing operations.
pub type Result<T> = std::result::Result<T, Error>;
