use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use tracing::{debug, info};

use crate::config::{AudioConfig, Cue};
use crate::error::AudioError;
use crate::sfx::SfxPlayer;

/// Wraps kira's AudioManager and plays simulation cues.
pub struct AudioEngine {
    manager: AudioManager<DefaultBackend>,
    sfx: SfxPlayer,
    config: AudioConfig,
}

impl AudioEngine {
    /// Open the default output device.
    pub fn new(config: AudioConfig) -> Result<Self, AudioError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AudioError::BackendUnavailable(e.to_string()))?;

        info!("Audio engine initialized");

        Ok(Self {
            manager,
            sfx: SfxPlayer::new(config.effective_sfx_volume()),
            config,
        })
    }

    /// Decode every cue file now. Missing files are reported but keep the
    /// engine usable for the cues that did load.
    pub fn preload_cues(&mut self) -> Vec<AudioError> {
        let mut failures = Vec::new();
        for cue in Cue::ALL {
            if let Err(e) = self.sfx.preload(&self.config.cues, cue) {
                debug!(?cue, error = %e, "cue preload failed");
                failures.push(e);
            }
        }
        failures
    }

    /// Play a one-shot cue.
    pub fn play_cue(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.sfx.play(&mut self.manager, &self.config.cues, cue)
    }

    /// Call each frame to clean up finished sounds.
    pub fn update(&mut self) {
        self.sfx.cleanup();
    }
}
