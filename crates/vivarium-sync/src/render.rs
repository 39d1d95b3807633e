//! Rendering contract
//!
//! The engine never draws anything itself; it hands blended poses to an
//! external renderer through this trait, once per live organism per tick
//! and up to twice more in debug mode.

use vivarium_core::{Organism, OrganismId, Pose};

/// What a render call is asking the renderer to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// The organism body
    Body,
    /// The perception range overlay (debug mode)
    Perception,
    /// The attack range overlay (debug mode)
    Attack,
}

/// External renderer invoked by the frame driver
///
/// Geometry for the perception and attack overlays is the renderer's
/// business; the engine only decides whether to request them.
pub trait Renderer {
    /// Draw one representation of an organism at the blended pose
    fn render(&mut self, organism: &Organism, pose: &Pose, kind: RenderKind);
}

/// Renderer that records every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Every render call in invocation order
    pub calls: Vec<(OrganismId, Pose, RenderKind)>,
}

impl RecordingRenderer {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the calls of a given kind
    pub fn of_kind(
        &self,
        kind: RenderKind,
    ) -> impl Iterator<Item = &(OrganismId, Pose, RenderKind)> {
        self.calls.iter().filter(move |(_, _, k)| *k == kind)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, organism: &Organism, pose: &Pose, kind: RenderKind) {
        self.calls.push((organism.id, *pose, kind));
    }
}
