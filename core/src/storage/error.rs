//! Error types for observation storage

use std::path::PathBuf;
use thiserror::Error;

/// Errors during observation log operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open observation log {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to observation log {path}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode observation record")]
    Encode(#[source] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
