//! Look orientation and camera pose

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::CameraConfig;

/// Yaw/pitch look orientation in radians.
///
/// Yaw 0 faces -Z; positive yaw turns right. Positive pitch looks up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Look {
    pub yaw: f32,
    pub pitch: f32,
}

impl Look {
    /// Apply a raw mouse delta (pixels). Instantaneous, not time-scaled.
    pub fn apply_delta(&mut self, delta: Vec2, config: &CameraConfig) {
        if !delta.is_finite() {
            return;
        }
        self.yaw = wrap_angle(self.yaw + delta.x * config.sensitivity);
        self.set_pitch(self.pitch - delta.y * config.sensitivity, config);
    }

    /// Set pitch directly, clamped symmetrically to the configured limit
    pub fn set_pitch(&mut self, pitch: f32, config: &CameraConfig) {
        if pitch.is_nan() {
            return;
        }
        let limit = config.pitch_limit.to_radians().abs();
        self.pitch = pitch.max(-limit).min(limit);
    }

    /// Full view direction including pitch
    pub fn forward(&self) -> Vec3 {
        let cos_pitch = self.pitch.cos();
        Vec3::new(
            self.yaw.sin() * cos_pitch,
            self.pitch.sin(),
            -self.yaw.cos() * cos_pitch,
        )
    }

    /// Horizontal forward (yaw only); movement never tilts with pitch
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }
}

/// Wrap an angle into `[-PI, PI)`
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid rounds up to TAU for tiny negative remainders
    if wrapped >= PI {
        -PI
    } else {
        wrapped
    }
}

/// Drawable area size; only the projection depends on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Viewport {
    /// Update the size. Degenerate sizes (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera pose handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look: Look,
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraPose {
    pub fn new(eye: Vec3, look: Look, viewport: Viewport, config: &CameraConfig) -> Self {
        Self {
            position: eye,
            look,
            view: Mat4::look_to_rh(eye, look.forward(), Vec3::Y),
            projection: Mat4::perspective_rh(
                config.fov_degrees.to_radians(),
                viewport.aspect_ratio(),
                config.near,
                config.far,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_look_faces_negative_z() {
        let look = Look::default();
        assert!((look.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((look.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped() {
        let config = CameraConfig::default();
        let mut look = Look::default();
        look.apply_delta(Vec2::new(0.0, -100_000.0), &config);
        assert!(look.pitch <= config.pitch_limit.to_radians() + 1e-5);

        look.apply_delta(Vec2::new(0.0, 200_000.0), &config);
        assert!(look.pitch >= -config.pitch_limit.to_radians() - 1e-5);
        assert!(look.forward().y < 0.0);
    }

    #[test]
    fn test_yaw_wraps() {
        let config = CameraConfig::default();
        let mut look = Look::default();
        for _ in 0..100 {
            look.apply_delta(Vec2::new(1000.0, 0.0), &config);
            assert!(look.yaw >= -PI && look.yaw < PI);
        }
    }

    #[test]
    fn test_flat_forward_ignores_pitch() {
        let config = CameraConfig::default();
        let mut look = Look::default();
        look.set_pitch(1.2, &config);
        assert_eq!(look.flat_forward().y, 0.0);
        assert!((look.flat_forward().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let config = CameraConfig::default();
        let mut look = Look { yaw: 0.5, pitch: 0.1 };
        look.apply_delta(Vec2::new(f32::NAN, 3.0), &config);
        assert_eq!(look, Look { yaw: 0.5, pitch: 0.1 });
    }

    #[test]
    fn test_zero_size_resize_ignored() {
        let mut viewport = Viewport::default();
        assert!(!viewport.resize(0, 600));
        assert!(viewport.resize(800, 400));
        assert!((viewport.aspect_ratio() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_pitch_limit_does_not_panic() {
        let config = CameraConfig {
            pitch_limit: -10.0,
            ..Default::default()
        };
        let mut look = Look::default();
        look.apply_delta(Vec2::new(1.0, -100_000.0), &config);
        assert!((look.pitch - 10.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_angle_never_returns_pi() {
        let just_below_neg_pi = f32::from_bits((-PI).to_bits() + 1);
        for angle in [PI, -PI, just_below_neg_pi, 3.0 * PI, -3.0 * PI, -1.0e-7, TAU] {
            let wrapped = wrap_angle(angle);
            assert!((-PI..PI).contains(&wrapped), "{angle} wrapped to {wrapped}");
        }
    }
}
