//! Vivarium Core - Data model and wire contract for the vivarium client
//!
//! This crate provides the types shared by the reconciliation engine and
//! any embedding renderer:
//! - Organism identity and behaviour state kinds
//! - The interpolable `Pose` with shortest-arc rotation blending
//! - Wire records mirroring the server's JSON contract
//! - The `ServerMessage` envelope for snapshot and update payloads
//!
//! The authoritative simulation lives on the server; everything here is a
//! client-side view of it.

mod error;
mod identity;
mod message;
mod organism;
mod pose;
mod record;
mod state;

pub use error::{Error, Result};
pub use identity::OrganismId;
pub use message::{EntryMap, ServerMessage};
pub use organism::{Attributes, Organism};
pub use pose::{lerp_angle, Pose};
pub use record::{AttributesRecord, OrganismRecord, StateRecord};
pub use state::StateKind;
