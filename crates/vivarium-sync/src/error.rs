//! Error types for vivarium-sync

use thiserror::Error;

/// Sync engine error type
#[derive(Debug, Error)]
pub enum Error {
    /// A raw message was not a valid envelope
    #[error("failed to decode server message: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record could not be used for full-state construction
    #[error(transparent)]
    Core(#[from] vivarium_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
