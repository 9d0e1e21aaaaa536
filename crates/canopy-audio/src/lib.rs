//! Canopy Audio - sound cue playback using kira
//!
//! Plays short one-shot cues (gunshot, kill confirmation, death sting) in
//! response to simulation signals. Every operation is fallible; hosts are
//! expected to log and drop failures rather than let them reach gameplay.

mod config;
mod error;
mod manager;
mod sfx;

pub use config::{AudioConfig, Cue, CueSet};
pub use error::AudioError;
pub use manager::AudioEngine;
