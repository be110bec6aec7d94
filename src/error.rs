//! Error types for the key-value storage layer.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by a [`KeyValueStore`](crate::storage::KeyValueStore) or
/// the JSON codec sitting on top of it.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read/write failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored text is not valid JSON for the requested type, or a value
    /// could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io { path: path.into(), source }
    }
}

/// Failures reported by a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    /// The store took the change but could not save it.
    #[error("failed to save tasks: {0}")]
    Persist(#[from] StorageError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
