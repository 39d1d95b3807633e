//! Interpolable visual state
//!
//! A `Pose` holds every continuously-varying field the renderer needs.
//! All fields blend linearly except rotation, which blends along the
//! shortest arc so poses never snap across the ±π wraparound.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// The interpolable visual state of an organism
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Pose {
    /// Position in simulation space (components in [0, 1])
    pub position: Vec3,
    /// Heading in radians
    pub rotation: f32,
    /// Remaining energy, drives body colour
    pub energy: f32,
    /// Hunger level, drives body colour
    pub hunger: f32,
    /// Attack range radius, drives the debug overlay scale
    pub range: f32,
}

impl Pose {
    /// Linearly interpolate toward `next` at `fraction`
    ///
    /// `fraction` is clamped to [0, 1]; the result is exactly `self` at 0
    /// and exactly `next` at 1. Rotation blends along the shortest arc.
    ///
    /// Uses the weighted form `a * (1 - f) + b * f` rather than
    /// `a + (b - a) * f` (the form `glam::Vec3::lerp` uses), which is
    /// endpoint-exact only at `f = 0`.
    pub fn lerp(&self, next: &Pose, fraction: f32) -> Pose {
        let f = fraction.clamp(0.0, 1.0);
        Pose {
            position: self.position * (1.0 - f) + next.position * f,
            rotation: lerp_angle(self.rotation, next.rotation, f),
            energy: self.energy * (1.0 - f) + next.energy * f,
            hunger: self.hunger * (1.0 - f) + next.hunger * f,
            range: self.range * (1.0 - f) + next.range * f,
        }
    }
}

/// Interpolate between two angles in radians along the shortest arc
///
/// When the direct path is already shortest the blend is endpoint-exact.
/// When it crosses the ±π wrap the result at `fraction = 1` equals `to`
/// up to a full turn, not bit-for-bit.
pub fn lerp_angle(from: f32, to: f32, fraction: f32) -> f32 {
    if (to - from).abs() <= PI {
        return from * (1.0 - fraction) + to * fraction;
    }
    let mut delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    from + delta * fraction
}
