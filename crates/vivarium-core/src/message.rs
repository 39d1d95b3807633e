//! Server message envelope
//!
//! The transport delivers JSON envelopes of the form
//! `{"type": "state" | "update", "data": {"<id>": <record>, ...}}`.
//! A `state` message replaces the entire known organism set; an `update`
//! message names a subset with new or partial state.

use crate::{OrganismId, OrganismRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Payload of a snapshot or update message, keyed by organism id
///
/// Uses `IndexMap` so entries keep their arrival order, which keeps
/// reconciliation output deterministic.
pub type EntryMap = IndexMap<OrganismId, OrganismRecord>;

/// A message pushed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Full snapshot: replaces the entire known organism set
    State(EntryMap),
    /// Incremental update: names a subset of organisms
    Update(EntryMap),
}
