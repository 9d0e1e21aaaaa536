//! Player module
//!
//! Player state (pose, velocity, health, ammo) and its per-frame kinematics.

mod controller;
mod movement;
mod state;

pub use controller::{KinematicsReport, PlayerController};
pub use movement::MovementConfig;
pub use state::{PlayerConfig, PlayerState};
