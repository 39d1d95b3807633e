//! Identity types for organisms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an organism, assigned by the server
///
/// Stable for the lifetime of the organism. Usable as a JSON map key
/// in the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrganismId(pub u32);

impl OrganismId {
    /// Create a new organism ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "organism:{}", self.0)
    }
}

impl From<u32> for OrganismId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
