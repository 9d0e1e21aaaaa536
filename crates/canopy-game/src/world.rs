//! Collaborator seams between the simulation and the surrounding world

use glam::Vec3;

use crate::combat::HitTarget;

/// Static world queries
pub trait World {
    /// Ground height under `position`
    fn ground_height(&self, position: Vec3) -> f32;
}

/// Infinite flat ground plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatGround {
    pub height: f32,
}

impl World for FlatGround {
    fn ground_height(&self, _position: Vec3) -> f32 {
        self.height
    }
}

/// Source of shootable targets, in a stable order
pub trait TargetQuery {
    fn live_targets(&self) -> Vec<HitTarget>;
}
