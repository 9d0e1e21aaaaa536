//! Lifecycle signals emitted by the simulation for audio, visual, and UI layers

use serde::Serialize;

use crate::enemy::EnemyId;

/// Outbound signal. Collected per frame and returned from the tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A round was fired
    ShotFired,
    /// A shot hit an enemy that survived
    EnemyHit { id: EnemyId, remaining_health: f32 },
    /// An enemy was killed and removed
    EnemyKilled { id: EnemyId },
    /// The player lost health this frame
    PlayerDamaged { amount: f32 },
    /// The player died. Emitted once per simulation.
    PlayerDied,
}
