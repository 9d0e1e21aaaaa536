//! Game settings with persistence
//!
//! Settings are saved to `~/.config/canopy/settings.toml`

use std::fs;
use std::path::PathBuf;

use canopy_audio::{AudioConfig, CueSet};
use canopy_game::SimulationConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub audio: AudioSettings,
    pub simulation: SimulationConfig,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("canopy"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Invalid settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse and validate settings text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.simulation.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Audio settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Play sound cues at all
    pub enabled: bool,
    /// Master volume (0.0 to 1.0)
    pub master: f32,
    /// Sound effects volume (0.0 to 1.0)
    pub sfx: f32,
    /// Directory holding `shot.ogg`, `enemy_killed.ogg`, `player_died.ogg`
    pub cue_dir: PathBuf,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            master: 1.0,
            sfx: 1.0,
            cue_dir: PathBuf::from("assets/sfx"),
        }
    }
}

impl AudioSettings {
    pub fn to_audio_config(&self) -> AudioConfig {
        AudioConfig {
            master_volume: self.master as f64,
            sfx_volume: self.sfx as f64,
            cues: CueSet {
                shot: self.cue_dir.join("shot.ogg"),
                enemy_killed: self.cue_dir.join("enemy_killed.ogg"),
                player_died: self.cue_dir.join("player_died.ogg"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = GameSettings::parse(
            r#"
            [simulation.enemy]
            aggro_radius = 60.0

            [simulation.scenario]
            enemy_count = 3
            seed = 9
            "#,
        )
        .unwrap();

        assert_eq!(settings.simulation.enemy.aggro_radius, 60.0);
        assert_eq!(settings.simulation.enemy.melee_radius, 2.2);
        assert_eq!(settings.simulation.scenario.enemy_count, 3);
        assert_eq!(settings.simulation.scenario.seed, Some(9));
        assert_eq!(settings.simulation.player.starting_ammo, 12);
        assert!(settings.audio.enabled);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let result = GameSettings::parse(
            r#"
            [simulation.enemy]
            melee_radius = 500.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut settings = GameSettings::default();
        settings.simulation.scenario.seed = Some(3);
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed = GameSettings::parse(&text).unwrap();
        assert_eq!(parsed.simulation.scenario.seed, Some(3));
        assert_eq!(
            parsed.simulation.scenario.player_start,
            settings.simulation.scenario.player_start
        );
    }

    #[test]
    fn test_cue_paths_follow_directory() {
        let audio = AudioSettings {
            cue_dir: PathBuf::from("/tmp/cues"),
            ..Default::default()
        };
        let config = audio.to_audio_config();
        assert_eq!(config.cues.shot, PathBuf::from("/tmp/cues/shot.ogg"));
    }
}
