//! Error types for vivarium-core

use crate::OrganismId;
use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// A record is missing a field required for full-state construction
    #[error("malformed state for {id}: missing {field}")]
    MalformedState {
        /// The organism the record named
        id: OrganismId,
        /// The required field that was absent
        field: &'static str,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
