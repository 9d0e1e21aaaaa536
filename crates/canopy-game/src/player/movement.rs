//! Movement configuration and constants

use serde::{Deserialize, Serialize};

/// Movement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Horizontal velocity decay rate per second (`v -= v * damping * dt`)
    pub damping: f32,
    /// Base gravity in units per second squared
    pub gravity: f32,
    /// Gravity multiplier for a snappier fall
    pub gravity_scale: f32,
    /// Acceleration applied while movement keys are held
    pub acceleration: f32,
    /// Vertical velocity added by a jump
    pub jump_impulse: f32,
    /// Eye height above the ground
    pub eye_height: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            gravity: 9.8,
            gravity_scale: 5.0,
            acceleration: 400.0,
            jump_impulse: 5.0,
            eye_height: 1.6,
        }
    }
}

impl MovementConfig {
    /// Effective downward acceleration
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.gravity_scale
    }
}
