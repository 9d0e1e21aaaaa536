use std::path::PathBuf;

/// Audio failures. None of these are fatal to the simulation.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    BackendUnavailable(String),

    #[error("cue file '{path}' could not be decoded: {reason}")]
    CueLoad { path: PathBuf, reason: String },

    #[error("cue playback failed: {0}")]
    Playback(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_load_names_the_file() {
        let err = AudioError::CueLoad {
            path: PathBuf::from("assets/sfx/shot.ogg"),
            reason: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "cue file 'assets/sfx/shot.ogg' could not be decoded: not found"
        );
    }
}
