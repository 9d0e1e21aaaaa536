use std::path::{Path, PathBuf};

/// Sounds the host can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A round was fired
    Shot,
    /// An enemy went down
    EnemyKilled,
    /// The player died
    PlayerDied,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Shot, Cue::EnemyKilled, Cue::PlayerDied];
}

/// File used for each cue
#[derive(Debug, Clone, PartialEq)]
pub struct CueSet {
    pub shot: PathBuf,
    pub enemy_killed: PathBuf,
    pub player_died: PathBuf,
}

impl Default for CueSet {
    fn default() -> Self {
        Self {
            shot: PathBuf::from("assets/sfx/shot.ogg"),
            enemy_killed: PathBuf::from("assets/sfx/enemy_killed.ogg"),
            player_died: PathBuf::from("assets/sfx/player_died.ogg"),
        }
    }
}

impl CueSet {
    pub fn path(&self, cue: Cue) -> &Path {
        match cue {
            Cue::Shot => &self.shot,
            Cue::EnemyKilled => &self.enemy_killed,
            Cue::PlayerDied => &self.player_died,
        }
    }
}

/// Audio configuration. Maps to the `AudioSettings` in the game's settings.
#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// Master volume multiplier (0.0–1.0).
    pub master_volume: f64,
    /// Sound effects volume multiplier (0.0–1.0).
    pub sfx_volume: f64,
    /// Cue files
    pub cues: CueSet,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            cues: CueSet::default(),
        }
    }
}

impl AudioConfig {
    /// Effective SFX volume (master * sfx), clamped to 0.0–1.0.
    pub fn effective_sfx_volume(&self) -> f64 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_volume() {
        let config = AudioConfig {
            master_volume: 0.5,
            sfx_volume: 0.6,
            ..Default::default()
        };
        assert!((config.effective_sfx_volume() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn every_cue_has_a_path() {
        let cues = CueSet::default();
        for cue in Cue::ALL {
            assert!(cues.path(cue).extension().is_some());
        }
    }
}
