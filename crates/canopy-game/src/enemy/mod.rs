//! Enemy module - per-enemy behavior and the live enemy collection

mod behavior;
mod manager;

pub use behavior::{classify, EnemyConfig};
pub use manager::{BehaviorReport, DamageOutcome, EnemyManager};

use std::fmt;

use canopy_ecs::Entity;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable identifier for an enemy; stays valid (and never aliases another
/// enemy) after removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub Entity);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Behavior state, derived from distance to the player every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyState {
    /// Out of aggro range; drifts in place
    Patrol,
    /// Closing in on the player
    Chase,
    /// Close enough to deal continuous damage
    Melee,
}

/// A live enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub position: Vec3,
    pub health: f32,
    pub state: EnemyState,
    /// Patrol phase offset so enemies do not drift in lockstep
    pub patrol_phase: f32,
}
