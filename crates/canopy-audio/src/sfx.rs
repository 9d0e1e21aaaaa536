use std::collections::HashMap;

use kira::manager::backend::DefaultBackend;
use kira::manager::AudioManager;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings};
use kira::sound::PlaybackState;
use tracing::trace;

use crate::config::{Cue, CueSet};
use crate::error::AudioError;

/// One-shot cue playback with decoded data cached per cue.
pub struct SfxPlayer {
    decoded: HashMap<Cue, StaticSoundData>,
    playing: Vec<StaticSoundHandle>,
    volume: f64,
}

impl SfxPlayer {
    pub fn new(volume: f64) -> Self {
        Self {
            decoded: HashMap::new(),
            playing: Vec::new(),
            volume,
        }
    }

    /// Start a cue. Overlapping plays of the same cue are allowed.
    pub fn play(
        &mut self,
        manager: &mut AudioManager<DefaultBackend>,
        cues: &CueSet,
        cue: Cue,
    ) -> Result<(), AudioError> {
        let data = self
            .decode(cues, cue)?
            .with_settings(StaticSoundSettings::new().volume(self.volume));
        let handle = manager
            .play(data)
            .map_err(|e| AudioError::Playback(e.to_string()))?;
        self.playing.push(handle);
        trace!(?cue, playing = self.playing.len(), "cue started");
        Ok(())
    }

    /// Decode a cue ahead of its first play.
    pub fn preload(&mut self, cues: &CueSet, cue: Cue) -> Result<(), AudioError> {
        self.decode(cues, cue).map(|_| ())
    }

    /// Drop handles of cues that finished playing.
    pub fn cleanup(&mut self) {
        self.playing
            .retain(|handle| handle.state() != PlaybackState::Stopped);
    }

    fn decode(&mut self, cues: &CueSet, cue: Cue) -> Result<StaticSoundData, AudioError> {
        if let Some(data) = self.decoded.get(&cue) {
            return Ok(data.clone());
        }
        let path = cues.path(cue);
        let data = StaticSoundData::from_file(path).map_err(|e| AudioError::CueLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.decoded.insert(cue, data.clone());
        Ok(data)
    }
}
