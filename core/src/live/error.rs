//! Error types for live subscription operations

use thiserror::Error;

use super::GatewayError;
use crate::storage::StorageError;

/// Errors registering a live subscription
#[derive(Debug, Error)]
pub enum LiveError {
    #[error("failed to read observations")]
    Storage(#[from] StorageError),

    #[error("failed to publish to surface")]
    Gateway(#[from] GatewayError),
}
