//! A single organism's state container
//!
//! An `Organism` is the client's last fully-merged view of one remote
//! organism. It is created from a complete wire record, mutated in place
//! by incremental updates, and knows how to produce a blended pose toward
//! a staged update without mutating itself.

use crate::{AttributesRecord, Error, OrganismId, OrganismRecord, Pose, Result, StateKind};
use serde::{Deserialize, Serialize};

/// Merged attribute values of an organism
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Attributes {
    /// Family line identifier
    pub family: u32,
    /// Hunger level
    pub hunger: f32,
    /// Remaining energy
    pub energy: f32,
    /// Offensive strength
    pub offense: u32,
    /// Defensive strength
    pub defense: u32,
    /// Movement agility
    pub agility: u32,
    /// Attack range radius
    pub range: f32,
    /// Reproduction rate
    pub reproductivity: u32,
}

impl Attributes {
    /// Fold a partial attribute record into these values
    pub fn merge(&mut self, record: &AttributesRecord) {
        if let Some(family) = record.family {
            self.family = family;
        }
        if let Some(hunger) = record.hunger {
            self.hunger = hunger;
        }
        if let Some(energy) = record.energy {
            self.energy = energy;
        }
        if let Some(offense) = record.offense {
            self.offense = offense;
        }
        if let Some(defense) = record.defense {
            self.defense = defense;
        }
        if let Some(agility) = record.agility {
            self.agility = agility;
        }
        if let Some(range) = record.range {
            self.range = range;
        }
        if let Some(reproductivity) = record.reproductivity {
            self.reproductivity = reproductivity;
        }
    }
}

/// The client-side state of one remote organism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    /// Server-assigned identity, stable for the organism's lifetime
    pub id: OrganismId,
    /// Current behaviour state
    pub kind: StateKind,
    /// Target organism when attacking / defending / consuming
    pub target: Option<OrganismId>,
    /// Merged attributes
    pub attributes: Attributes,
    /// Last fully-merged pose
    pose: Pose,
}

impl Organism {
    /// Construct an organism from a complete wire record
    ///
    /// Used at creation and snapshot reset only. Fails with
    /// [`Error::MalformedState`] when the record lacks a state block,
    /// a state kind, or a position. The attribute block may be absent,
    /// in which case attributes start at their defaults.
    pub fn from_record(record: &OrganismRecord) -> Result<Self> {
        let state = record.state.as_ref().ok_or(Error::MalformedState {
            id: record.id,
            field: "state",
        })?;
        let kind = state.kind.ok_or(Error::MalformedState {
            id: record.id,
            field: "state.type",
        })?;
        let position = state.position.ok_or(Error::MalformedState {
            id: record.id,
            field: "state.position",
        })?;

        let mut attributes = Attributes::default();
        if let Some(block) = &record.attributes {
            attributes.merge(block);
        }

        Ok(Self {
            id: record.id,
            kind,
            target: state.target,
            attributes,
            pose: Pose {
                position: position.into(),
                rotation: record.rotation.unwrap_or(0.0),
                energy: attributes.energy,
                hunger: attributes.hunger,
                range: attributes.range,
            },
        })
    }

    /// Fold a partial update into the live fields in place
    ///
    /// Never changes identity. A `dead` kind marks the organism for
    /// removal but leaves the last pose intact, so the final blend toward
    /// the death frame still renders once.
    pub fn merge_update(&mut self, record: &OrganismRecord) {
        if let Some(state) = &record.state {
            if let Some(kind) = state.kind {
                self.kind = kind;
            }
            if let Some(target) = state.target {
                self.target = Some(target);
            }
            if let Some(position) = state.position {
                self.pose.position = position.into();
            }
        }
        if let Some(block) = &record.attributes {
            self.attributes.merge(block);
            self.pose.energy = self.attributes.energy;
            self.pose.hunger = self.attributes.hunger;
            self.pose.range = self.attributes.range;
        }
        if let Some(rotation) = record.rotation {
            self.pose.rotation = rotation;
        }
    }

    /// Produce the blended pose toward a staged update at `fraction`
    ///
    /// Pure: does not mutate the organism. With no staged update the
    /// current pose is returned unchanged, holding the organism at its
    /// last known pose. Fields the staged record does not carry hold at
    /// their current value rather than blending toward a default.
    pub fn blend(&self, next: Option<&OrganismRecord>, fraction: f32) -> Pose {
        let Some(record) = next else {
            return self.pose;
        };

        let mut target = self.pose;
        if let Some(position) = record.position() {
            target.position = position;
        }
        if let Some(rotation) = record.rotation {
            target.rotation = rotation;
        }
        if let Some(block) = &record.attributes {
            if let Some(energy) = block.energy {
                target.energy = energy;
            }
            if let Some(hunger) = block.hunger {
                target.hunger = hunger;
            }
            if let Some(range) = block.range {
                target.range = range;
            }
        }

        self.pose.lerp(&target, fraction)
    }

    /// Check if the organism has reached the terminal state
    pub fn is_dead(&self) -> bool {
        self.kind.is_dead()
    }

    /// Get the last fully-merged pose
    pub fn pose(&self) -> Pose {
        self.pose
    }
}
