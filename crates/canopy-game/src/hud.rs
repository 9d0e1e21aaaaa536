//! HUD projection

use std::fmt;

use serde::Serialize;

use crate::player::PlayerState;

/// Read-only display values, recomputed every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub health: u32,
    pub ammo: u32,
    pub enemy_count: usize,
}

impl HudSnapshot {
    pub fn capture(player: &PlayerState, enemy_count: usize) -> Self {
        Self {
            health: player.health().round().max(0.0) as u32,
            ammo: player.ammo(),
            enemy_count,
        }
    }
}

impl fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP: {}  Ammo: {}  Enemies: {}",
            self.health, self.ammo, self.enemy_count
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::player::PlayerConfig;

    #[test]
    fn test_health_is_rounded() {
        let mut player = PlayerState::new(Vec3::ZERO, &PlayerConfig::default());
        player.set_health(42.6);
        let hud = HudSnapshot::capture(&player, 3);
        assert_eq!(hud.health, 43);
        assert_eq!(hud.ammo, 12);
        assert_eq!(hud.enemy_count, 3);

        player.set_health(0.4);
        assert_eq!(HudSnapshot::capture(&player, 0).health, 0);
    }

    #[test]
    fn test_display() {
        let hud = HudSnapshot {
            health: 100,
            ammo: 12,
            enemy_count: 8,
        };
        assert_eq!(hud.to_string(), "HP: 100  Ammo: 12  Enemies: 8");
    }
}
