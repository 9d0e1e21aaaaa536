//! Simulation configuration
//!
//! Every section defaults to the stock tuning, so a partial settings file
//! only needs the values it changes.

use canopy_core::TimeConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::combat::CombatConfig;
use crate::enemy::EnemyConfig;
use crate::player::{MovementConfig, PlayerConfig};

/// Initial layout of a new simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Enemies spawned at construction
    pub enemy_count: usize,
    /// Enemies spawn uniformly in `[-extent, extent]` on X and Z
    pub spawn_half_extent: f32,
    /// Enemy spawn height
    pub spawn_height: f32,
    /// Player eye position at construction
    pub player_start: Vec3,
    /// Fixed seed for reproducible spawns
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            enemy_count: 8,
            spawn_half_extent: 300.0,
            spawn_height: 1.0,
            player_start: Vec3::new(0.0, 1.6, 0.0),
            seed: None,
        }
    }
}

/// All tuning for one simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub player: PlayerConfig,
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub enemy: EnemyConfig,
    pub combat: CombatConfig,
    pub time: TimeConfig,
    pub scenario: ScenarioConfig,
}

/// Invalid tuning values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be zero or positive and finite, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("melee radius {melee} must be smaller than aggro radius {aggro}")]
    MeleeOutsideAggro { melee: f32, aggro: f32 },

    #[error("max delta {max} is smaller than min delta {min}")]
    DeltaRange { min: f32, max: f32 },

    #[error("damping {damping} overshoots at max delta {max_delta}")]
    DampingOvershoot { damping: f32, max_delta: f32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

impl SimulationConfig {
    /// Check values the simulation cannot run sensibly with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.max_health", self.player.max_health)?;
        positive("movement.eye_height", self.movement.eye_height)?;
        positive("camera.sensitivity", self.camera.sensitivity)?;
        positive("camera.pitch_limit", self.camera.pitch_limit)?;
        positive("enemy.initial_health", self.enemy.initial_health)?;
        positive("enemy.aggro_radius", self.enemy.aggro_radius)?;
        positive("enemy.melee_radius", self.enemy.melee_radius)?;
        positive("combat.range", self.combat.range)?;
        positive("time.min_delta", self.time.min_delta)?;
        positive("scenario.spawn_half_extent", self.scenario.spawn_half_extent)?;

        non_negative("movement.damping", self.movement.damping)?;
        non_negative("movement.gravity", self.movement.gravity)?;
        non_negative("movement.gravity_scale", self.movement.gravity_scale)?;
        non_negative("movement.acceleration", self.movement.acceleration)?;
        non_negative("movement.jump_impulse", self.movement.jump_impulse)?;
        non_negative("enemy.chase_speed", self.enemy.chase_speed)?;
        non_negative("enemy.melee_dps", self.enemy.melee_dps)?;
        non_negative("combat.damage", self.combat.damage)?;

        if self.enemy.melee_radius >= self.enemy.aggro_radius {
            return Err(ConfigError::MeleeOutsideAggro {
                melee: self.enemy.melee_radius,
                aggro: self.enemy.aggro_radius,
            });
        }
        if self.time.max_delta.is_nan() || self.time.max_delta < self.time.min_delta {
            return Err(ConfigError::DeltaRange {
                min: self.time.min_delta,
                max: self.time.max_delta,
            });
        }
        if self.movement.damping * self.time.max_delta > 1.0 {
            return Err(ConfigError::DampingOvershoot {
                damping: self.movement.damping,
                max_delta: self.time.max_delta,
            });
        }
        Ok(())
    }
}
