//! Canopy - headless first-person arena simulation
//!
//! Runs one simulation session at a synthetic 60 Hz display rate with a
//! scripted pilot standing in for the player.
//!
//! Usage: `canopy [frames] [--seed N] [--save-settings]`

mod feedback;
mod pilot;
mod settings;

use anyhow::{Context, Result};
use canopy_audio::AudioEngine;
use canopy_game::{SimPhase, Simulation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::pilot::Pilot;
use crate::settings::GameSettings;

const FRAME_RATE: f64 = 60.0;
const DEFAULT_FRAMES: u64 = 1800;
const FIRE_INTERVAL: u64 = 30;
const STANDOFF: f32 = 25.0;

struct RunArgs {
    frames: u64,
    seed: Option<u64>,
    /// Persist the effective settings before running
    save_settings: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<RunArgs> {
    let mut run = RunArgs {
        frames: DEFAULT_FRAMES,
        seed: None,
        save_settings: false,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().context("--seed needs a value")?;
            run.seed = Some(value.parse().context("invalid --seed")?);
        } else if arg == "--save-settings" {
            run.save_settings = true;
        } else {
            run.frames = arg.parse().context("invalid frame count")?;
        }
    }
    Ok(run)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Canopy...");

    let run = parse_args(std::env::args().skip(1))?;
    let mut settings = GameSettings::load();
    if run.seed.is_some() {
        settings.simulation.scenario.seed = run.seed;
    }
    if run.save_settings {
        settings.save().context("failed to save settings")?;
    }

    let mut audio = if settings.audio.enabled {
        match AudioEngine::new(settings.audio.to_audio_config()) {
            Ok(mut engine) => {
                let failures = engine.preload_cues();
                if !failures.is_empty() {
                    warn!("{} sound cue(s) failed to load", failures.len());
                }
                Some(engine)
            }
            Err(e) => {
                warn!("Audio unavailable, continuing without sound: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut simulation =
        Simulation::from_scenario(settings.simulation).context("invalid simulation settings")?;
    let mut pilot = Pilot::new(FIRE_INTERVAL, STANDOFF);
    info!(session = %simulation.session(), frames = run.frames, "session started");

    for frame in 1..=run.frames {
        pilot.drive(&mut simulation, frame);
        let output = simulation.tick(frame as f64 / FRAME_RATE);
        feedback::dispatch(audio.as_mut(), &output.events);

        if frame % FRAME_RATE as u64 == 0 {
            info!("{}", output.hud);
        }
        if output.phase == SimPhase::GameOver {
            info!(frame, "game over");
            break;
        }
        if simulation.enemies().is_empty() {
            info!(frame, "arena cleared");
            break;
        }
    }

    let session = simulation.session();
    let phase = simulation.phase();
    let frames = simulation.frame_count();
    let hud = simulation.shutdown();

    let summary = serde_json::json!({
        "session": session.to_string(),
        "frames": frames,
        "phase": format!("{:?}", phase),
        "hud": hud,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
