//! Enemy manager - spawn, damage, remove, and update all live enemies

use canopy_core::Transform;
use canopy_ecs::Arena;
use glam::Vec3;
use tracing::{debug, info};

use super::behavior::{self, EnemyConfig};
use super::{Enemy, EnemyId, EnemyState};
use crate::combat::{Aabb, HitTarget};
use crate::world::TargetQuery;

/// Result of damaging an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Survived with the given health
    Wounded { remaining_health: f32 },
    /// Health reached zero; already removed from the collection
    Killed,
}

/// Aggregate result of one behavior pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BehaviorReport {
    /// Total damage dealt to the player this frame
    pub melee_damage: f32,
    /// Enemies chasing or in melee
    pub engaged: usize,
}

/// Owns every live enemy, addressed by stable [`EnemyId`]
#[derive(Debug, Clone, Default)]
pub struct EnemyManager {
    pub config: EnemyConfig,
    enemies: Arena<Enemy>,
}

impl EnemyManager {
    pub fn new(config: EnemyConfig) -> Self {
        Self {
            config,
            enemies: Arena::new(),
        }
    }

    /// Spawn an enemy at full health. Non-finite positions are rejected.
    pub fn spawn(&mut self, position: Vec3) -> Option<EnemyId> {
        if !position.is_finite() {
            return None;
        }
        let health = self.config.initial_health;
        let entity = self.enemies.insert_with(|entity| Enemy {
            id: EnemyId(entity),
            position,
            health,
            state: EnemyState::Patrol,
            patrol_phase: entity.index() as f32,
        });
        debug!(enemy = %EnemyId(entity), ?position, "enemy spawned");
        Some(EnemyId(entity))
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id.0)
    }

    /// Number of live enemies
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Live enemies in stable order
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    /// Reduce an enemy's health, removing it when health drops to zero.
    /// Returns `None` for unknown or already-removed ids.
    pub fn apply_damage(&mut self, id: EnemyId, amount: f32) -> Option<DamageOutcome> {
        let enemy = self.enemies.get_mut(id.0)?;
        enemy.health -= amount;
        if enemy.health > 0.0 {
            return Some(DamageOutcome::Wounded {
                remaining_health: enemy.health,
            });
        }
        self.enemies.remove(id.0);
        info!(enemy = %id, remaining = self.enemies.len(), "enemy killed");
        Some(DamageOutcome::Killed)
    }

    /// Run every enemy's behavior for one frame
    pub fn update(&mut self, player_position: Vec3, dt: f32, elapsed: f64) -> BehaviorReport {
        let config = &self.config;
        let mut report = BehaviorReport::default();
        for enemy in self.enemies.iter_mut() {
            report.melee_damage += behavior::step(enemy, player_position, dt, elapsed, config);
            if enemy.state != EnemyState::Patrol {
                report.engaged += 1;
            }
        }
        report
    }

    /// Transforms for the renderer, one per live enemy
    pub fn transforms(&self) -> Vec<(EnemyId, Transform)> {
        self.enemies
            .iter()
            .map(|enemy| (enemy.id, Transform::from_position(enemy.position)))
            .collect()
    }
}

impl TargetQuery for EnemyManager {
    fn live_targets(&self) -> Vec<HitTarget> {
        self.enemies
            .iter()
            .map(|enemy| HitTarget {
                id: enemy.id,
                bounds: Aabb::from_center(enemy.position, self.config.half_extents),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_rejects_non_finite() {
        let mut manager = EnemyManager::default();
        assert!(manager.spawn(Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
        assert!(manager.spawn(Vec3::ZERO).is_some());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_damage_removes_at_zero() {
        let mut manager = EnemyManager::default();
        let id = manager.spawn(Vec3::new(0.0, 1.0, -10.0)).unwrap();

        assert_eq!(
            manager.apply_damage(id, 20.0),
            Some(DamageOutcome::Wounded {
                remaining_health: 10.0
            })
        );
        assert_eq!(manager.apply_damage(id, 20.0), Some(DamageOutcome::Killed));
        assert!(manager.get(id).is_none());
        assert!(manager.is_empty());
        assert_eq!(manager.apply_damage(id, 20.0), None);
    }

    #[test]
    fn test_removal_keeps_other_ids_stable() {
        let mut manager = EnemyManager::default();
        let a = manager.spawn(Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let b = manager.spawn(Vec3::new(2.0, 1.0, 0.0)).unwrap();
        let c = manager.spawn(Vec3::new(3.0, 1.0, 0.0)).unwrap();

        manager.apply_damage(b, 100.0);
        assert_eq!(manager.get(a).unwrap().position.x, 1.0);
        assert_eq!(manager.get(c).unwrap().position.x, 3.0);

        let d = manager.spawn(Vec3::new(4.0, 1.0, 0.0)).unwrap();
        assert_ne!(b, d);
        assert!(manager.get(b).is_none());
    }

    #[test]
    fn test_update_sums_melee_damage() {
        let mut manager = EnemyManager::default();
        let player = Vec3::new(0.0, 1.6, 0.0);
        manager.spawn(Vec3::new(1.0, 1.6, 0.0));
        manager.spawn(Vec3::new(-1.0, 1.6, 0.0));
        manager.spawn(Vec3::new(50.0, 1.6, 0.0));
        manager.spawn(Vec3::new(500.0, 1.6, 0.0));

        let report = manager.update(player, 0.1, 0.0);
        assert!((report.melee_damage - 2.0).abs() < 1e-5);
        assert_eq!(report.engaged, 3);
    }

    #[test]
    fn test_live_targets_match_collection() {
        let mut manager = EnemyManager::default();
        let id = manager.spawn(Vec3::new(0.0, 1.0, -5.0)).unwrap();
        let targets = manager.live_targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, id);
        assert!((targets[0].bounds.min - Vec3::new(-0.6, 0.0, -5.6)).length() < 1e-5);
        assert_eq!(manager.transforms()[0].1.position, Vec3::new(0.0, 1.0, -5.0));
    }
}
