//! Camera configuration

use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Mouse sensitivity (radians per pixel)
    pub sensitivity: f32,
    /// Pitch limit in degrees, applied symmetrically
    pub pitch_limit: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            pitch_limit: 89.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}
