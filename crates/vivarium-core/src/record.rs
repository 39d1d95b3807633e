//! Wire records for snapshot and update payloads
//!
//! Records mirror the server's JSON contract. Every field that can be
//! omitted on an incremental update is an `Option`; whether a record is
//! complete enough for full-state construction is decided by
//! [`Organism::from_record`](crate::Organism::from_record), not here.

use crate::{OrganismId, StateKind};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Behaviour state block of a wire record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StateRecord {
    /// Behaviour state kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<StateKind>,
    /// Target organism when attacking / defending / consuming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<OrganismId>,
    /// Position in simulation space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
}

/// Attribute block of a wire record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttributesRecord {
    /// Family line identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<u32>,
    /// Hunger level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunger: Option<f32>,
    /// Remaining energy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f32>,
    /// Offensive strength
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offense: Option<u32>,
    /// Defensive strength
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    /// Movement agility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agility: Option<u32>,
    /// Attack range radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<f32>,
    /// Reproduction rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reproductivity: Option<u32>,
}

/// A single organism entry in a snapshot or update payload
///
/// Snapshot entries are expected to be complete; update entries may carry
/// any subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismRecord {
    /// The organism this record describes
    pub id: OrganismId,
    /// Behaviour state block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateRecord>,
    /// Attribute block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributesRecord>,
    /// Heading in radians
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
}

impl OrganismRecord {
    /// Create a record carrying only an id
    pub fn new(id: OrganismId) -> Self {
        Self {
            id,
            state: None,
            attributes: None,
            rotation: None,
        }
    }

    /// Get the behaviour state kind, if the record carries one
    pub fn kind(&self) -> Option<StateKind> {
        self.state.as_ref().and_then(|s| s.kind)
    }

    /// Check if the record reports the terminal state
    pub fn is_dead(&self) -> bool {
        self.kind().is_some_and(|k| k.is_dead())
    }

    /// Get the position, if the record carries one
    pub fn position(&self) -> Option<Vec3> {
        self.state
            .as_ref()
            .and_then(|s| s.position)
            .map(Vec3::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_decodes() {
        let json = r#"{"id": 7, "state": {"type": "seeking"}}"#;
        let record: OrganismRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, OrganismId::new(7));
        assert_eq!(record.kind(), Some(StateKind::Seeking));
        assert!(record.position().is_none());
        assert!(record.attributes.is_none());
    }

    #[test]
    fn test_full_record_decodes() {
        let json = r#"{
            "id": 3,
            "state": {"type": "attacking", "target": 9, "position": [0.5, 0.25, 0.0]},
            "attributes": {"family": 1, "hunger": 0.2, "energy": 0.8, "range": 0.1},
            "rotation": 1.5
        }"#;
        let record: OrganismRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_dead());
        assert_eq!(record.position(), Some(Vec3::new(0.5, 0.25, 0.0)));
        assert_eq!(
            record.state.as_ref().unwrap().target,
            Some(OrganismId::new(9))
        );
        assert_eq!(record.attributes.as_ref().unwrap().energy, Some(0.8));
    }

    #[test]
    fn test_is_dead() {
        let json = r#"{"id": 1, "state": {"type": "dead"}}"#;
        let record: OrganismRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_dead());

        let bare = OrganismRecord::new(OrganismId::new(1));
        assert!(!bare.is_dead());
    }
}
