//! Camera module
//!
//! First-person look orientation driven by raw mouse deltas, and the camera
//! pose handed to the external renderer.

mod config;
mod look;

pub use config::CameraConfig;
pub use look::{CameraPose, Look, Viewport};
