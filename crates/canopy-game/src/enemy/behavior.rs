//! Per-enemy state machine: patrol, chase, melee

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{Enemy, EnemyState};

/// Enemy tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Health at spawn
    pub initial_health: f32,
    /// Distance below which the enemy chases
    pub aggro_radius: f32,
    /// Distance below which the enemy damages the player
    pub melee_radius: f32,
    /// Chase speed in units per second
    pub chase_speed: f32,
    /// Player damage per second while in melee range
    pub melee_dps: f32,
    /// Lateral patrol drift per frame
    pub patrol_drift: f32,
    /// Patrol oscillation rate in radians per second
    pub patrol_frequency: f32,
    /// Hit box half extents, centred on the enemy position
    pub half_extents: Vec3,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            initial_health: 30.0,
            aggro_radius: 120.0,
            melee_radius: 2.2,
            chase_speed: 1.0,
            melee_dps: 10.0,
            patrol_drift: 0.001,
            patrol_frequency: 0.3,
            half_extents: Vec3::new(0.6, 1.0, 0.6),
        }
    }
}

/// Behavior state for a given distance to the player
pub fn classify(distance: f32, config: &EnemyConfig) -> EnemyState {
    if distance < config.melee_radius {
        EnemyState::Melee
    } else if distance < config.aggro_radius {
        EnemyState::Chase
    } else {
        EnemyState::Patrol
    }
}

/// Advance one enemy by one frame. Returns the damage dealt to the player.
///
/// State is decided from the distance before moving. An enemy exactly on
/// top of the player has no direction and stays put.
pub(crate) fn step(
    enemy: &mut Enemy,
    player_position: Vec3,
    dt: f32,
    elapsed: f64,
    config: &EnemyConfig,
) -> f32 {
    let to_player = player_position - enemy.position;
    let state = classify(to_player.length(), config);
    enemy.state = state;

    match state {
        EnemyState::Patrol => {
            let phase = elapsed * config.patrol_frequency as f64 + enemy.patrol_phase as f64;
            enemy.position.x += phase.sin() as f32 * config.patrol_drift;
            0.0
        }
        EnemyState::Chase | EnemyState::Melee => {
            if let Some(direction) = to_player.try_normalize() {
                enemy.position += direction * config.chase_speed * dt;
            }
            if state == EnemyState::Melee {
                config.melee_dps * dt
            } else {
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use canopy_ecs::Entity;

    use super::*;
    use crate::enemy::EnemyId;

    fn enemy_at(position: Vec3) -> Enemy {
        Enemy {
            id: EnemyId(Entity::from_raw(0, 0)),
            position,
            health: 30.0,
            state: EnemyState::Patrol,
            patrol_phase: 0.0,
        }
    }

    #[test]
    fn test_classify_thresholds() {
        let config = EnemyConfig::default();
        assert_eq!(classify(200.0, &config), EnemyState::Patrol);
        assert_eq!(classify(120.0, &config), EnemyState::Patrol);
        assert_eq!(classify(119.9, &config), EnemyState::Chase);
        assert_eq!(classify(2.2, &config), EnemyState::Chase);
        assert_eq!(classify(2.0, &config), EnemyState::Melee);
    }

    #[test]
    fn test_far_enemy_patrols_without_approaching() {
        let config = EnemyConfig::default();
        let player = Vec3::new(0.0, 1.6, 0.0);
        let mut enemy = enemy_at(Vec3::new(0.0, 1.6, 200.0));

        let damage = step(&mut enemy, player, 0.016, 3.0, &config);
        assert_eq!(damage, 0.0);
        assert_eq!(enemy.state, EnemyState::Patrol);
        assert_eq!(enemy.position.z, 200.0);
        assert!((enemy.position.x).abs() <= config.patrol_drift);
    }

    #[test]
    fn test_chasing_enemy_moves_along_direction() {
        let config = EnemyConfig::default();
        let player = Vec3::new(0.0, 1.6, 0.0);
        let start = Vec3::new(30.0, 1.6, 40.0);
        let mut enemy = enemy_at(start);

        let dt = 0.016;
        step(&mut enemy, player, dt, 0.0, &config);
        assert_eq!(enemy.state, EnemyState::Chase);

        let expected = start + (player - start).normalize() * 1.0 * dt;
        assert!((enemy.position - expected).length() < 1e-5);
        assert!(((start - enemy.position).length() - dt).abs() < 1e-5);
    }

    #[test]
    fn test_melee_damage_scales_with_delta() {
        let config = EnemyConfig::default();
        let player = Vec3::new(0.0, 1.6, 0.0);
        let mut enemy = enemy_at(Vec3::new(1.0, 1.6, 0.0));

        let damage = step(&mut enemy, player, 0.05, 0.0, &config);
        assert_eq!(enemy.state, EnemyState::Melee);
        assert!((damage - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_enemy_does_not_move() {
        let config = EnemyConfig::default();
        let player = Vec3::new(0.0, 1.6, 0.0);
        let mut enemy = enemy_at(player);

        let damage = step(&mut enemy, player, 0.016, 0.0, &config);
        assert_eq!(enemy.position, player);
        assert!(damage > 0.0);
        assert!(enemy.position.is_finite());
    }
}
