//! Player state

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Look;

/// Starting resources for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Health at spawn and upper clamp
    pub max_health: f32,
    /// Rounds at spawn
    pub starting_ammo: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            starting_ammo: 12,
        }
    }
}

/// Player pose and resources.
///
/// `position` is the eye (camera) position. Health stays within
/// `[0, max_health]`; ammo is unsigned and only decremented when positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub look: Look,
    pub(crate) grounded: bool,
    health: f32,
    max_health: f32,
    ammo: u32,
}

impl PlayerState {
    pub fn new(position: Vec3, config: &PlayerConfig) -> Self {
        let max_health = config.max_health.max(0.0);
        Self {
            position,
            velocity: Vec3::ZERO,
            look: Look::default(),
            grounded: false,
            health: max_health,
            max_health,
            ammo: config.starting_ammo,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    /// Set health, clamped to `[0, max_health]`. NaN is ignored.
    pub fn set_health(&mut self, health: f32) {
        if health.is_nan() {
            return;
        }
        self.health = health.clamp(0.0, self.max_health);
    }

    /// Subtract health and return the amount actually removed
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let before = self.health;
        self.set_health(before - amount);
        before - self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn set_ammo(&mut self, ammo: u32) {
        self.ammo = ammo;
    }

    /// Spend one round. Returns `false` (and changes nothing) when empty.
    pub fn take_round(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}
