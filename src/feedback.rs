//! Routes simulation events to sound cues

use canopy_audio::{AudioEngine, Cue};
use canopy_game::GameEvent;
use tracing::debug;

/// Cue played for an event, if any
pub fn cue_for(event: &GameEvent) -> Option<Cue> {
    match event {
        GameEvent::ShotFired => Some(Cue::Shot),
        GameEvent::EnemyKilled { .. } => Some(Cue::EnemyKilled),
        GameEvent::PlayerDied => Some(Cue::PlayerDied),
        GameEvent::EnemyHit { .. } | GameEvent::PlayerDamaged { .. } => None,
    }
}

/// Play the cues for one frame's events. Playback failures never reach the
/// simulation.
pub fn dispatch(audio: Option<&mut AudioEngine>, events: &[GameEvent]) {
    let Some(audio) = audio else {
        return;
    };
    for event in events {
        if let Some(cue) = cue_for(event) {
            if let Err(e) = audio.play_cue(cue) {
                debug!(?cue, error = %e, "cue playback failed");
            }
        }
    }
    audio.update();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_events_have_cues() {
        assert_eq!(cue_for(&GameEvent::ShotFired), Some(Cue::Shot));
        assert_eq!(cue_for(&GameEvent::PlayerDied), Some(Cue::PlayerDied));
        assert_eq!(cue_for(&GameEvent::PlayerDamaged { amount: 1.0 }), None);
    }

    #[test]
    fn test_dispatch_without_audio_is_silent() {
        dispatch(None, &[GameEvent::ShotFired, GameEvent::PlayerDied]);
    }
}
