//! Combat resolver - hit-scan shots against live enemies

mod hitscan;

pub use hitscan::{trace, Aabb, Hit, HitTarget, Ray};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enemy::{DamageOutcome, EnemyId, EnemyManager};
use crate::player::PlayerState;
use crate::world::TargetQuery;

/// Weapon tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Damage per hit
    pub damage: f32,
    /// Maximum hit-scan distance (world bounds)
    pub range: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            damage: 20.0,
            range: 2000.0,
        }
    }
}

/// Result of one shot that actually fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// Nothing in the line of fire
    Miss,
    /// Target survived
    Hit { id: EnemyId, remaining_health: f32 },
    /// Target died and was removed
    Killed { id: EnemyId },
}

/// Resolve one fire edge.
///
/// Returns `None` without side effects when the magazine is empty.
/// Otherwise spends a round, casts from the eye along the full look
/// direction, and damages the nearest live enemy in range.
pub fn resolve_shot(
    player: &mut PlayerState,
    enemies: &mut EnemyManager,
    config: &CombatConfig,
) -> Option<ShotOutcome> {
    if !player.take_round() {
        debug!("fire ignored, out of ammo");
        return None;
    }

    let Some(ray) = Ray::new(player.position, player.look.forward()) else {
        return Some(ShotOutcome::Miss);
    };
    let targets = enemies.live_targets();
    let Some(hit) = trace(&ray, &targets, config.range) else {
        debug!(ammo = player.ammo(), "shot missed");
        return Some(ShotOutcome::Miss);
    };

    let outcome = match enemies.apply_damage(hit.id, config.damage) {
        Some(DamageOutcome::Wounded { remaining_health }) => ShotOutcome::Hit {
            id: hit.id,
            remaining_health,
        },
        Some(DamageOutcome::Killed) => ShotOutcome::Killed { id: hit.id },
        None => ShotOutcome::Miss,
    };
    debug!(enemy = %hit.id, distance = hit.distance, ?outcome, "shot hit");
    Some(outcome)
}
