//! Per-frame player kinematics

use glam::{Vec2, Vec3};
use tracing::trace;

use crate::camera::CameraConfig;
use crate::input::MoveIntent;

use super::{MovementConfig, PlayerConfig, PlayerState};

/// What happened during one kinematics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KinematicsReport {
    /// Touched the ground this step
    pub grounded: bool,
    /// A jump was applied this step
    pub jumped: bool,
}

/// Integrates look, velocity, and position for the player
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Movement configuration
    pub config: MovementConfig,
    /// Player state
    pub state: PlayerState,
}

impl PlayerController {
    /// Create a controller with the player at `position`
    pub fn new(position: Vec3, config: MovementConfig, player: &PlayerConfig) -> Self {
        Self {
            config,
            state: PlayerState::new(position, player),
        }
    }

    /// Apply raw mouse movement to the look orientation
    pub fn look(&mut self, delta: Vec2, camera: &CameraConfig) {
        if delta != Vec2::ZERO {
            self.state.look.apply_delta(delta, camera);
        }
    }

    /// Add the jump impulse if grounded. Returns whether the jump happened.
    pub fn try_jump(&mut self) -> bool {
        if !self.state.grounded {
            return false;
        }
        self.state.velocity.y += self.config.jump_impulse;
        self.state.grounded = false;
        true
    }

    /// Advance one frame. `dt` must already be sanitized (> 0).
    pub fn step(
        &mut self,
        intent: MoveIntent,
        jump: bool,
        ground_height: f32,
        dt: f32,
    ) -> KinematicsReport {
        let config = &self.config;
        let state = &mut self.state;

        // Exponential decay for a responsive stop
        state.velocity.x -= state.velocity.x * config.damping * dt;
        state.velocity.z -= state.velocity.z * config.damping * dt;
        state.velocity.y -= config.effective_gravity() * dt;

        // Velocity is stored in "pull" convention: negative z means forward
        let direction = intent.local_direction();
        if intent.longitudinal() {
            state.velocity.z -= direction.z * config.acceleration * dt;
        }
        if intent.lateral() {
            state.velocity.x -= direction.x * config.acceleration * dt;
        }

        let right = state.look.right();
        let forward = state.look.flat_forward();
        state.position += right * (-state.velocity.x * dt);
        state.position += forward * (-state.velocity.z * dt);
        state.position.y += state.velocity.y * dt;

        let floor = ground_height + config.eye_height;
        if state.position.y < floor {
            state.velocity.y = 0.0;
            state.position.y = floor;
            state.grounded = true;
        } else {
            state.grounded = false;
        }

        let grounded = state.grounded;
        let jumped = jump && self.try_jump();

        trace!(
            position = ?self.state.position,
            velocity = ?self.state.velocity,
            grounded,
            "player step"
        );

        KinematicsReport { grounded, jumped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn controller_at(y: f32) -> PlayerController {
        PlayerController::new(
            Vec3::new(0.0, y, 0.0),
            MovementConfig::default(),
            &PlayerConfig::default(),
        )
    }

    fn forward() -> MoveIntent {
        MoveIntent {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_falls_and_lands_at_eye_height() {
        let mut player = controller_at(5.0);
        let mut previous = player.state.position.y;
        for _ in 0..10 {
            player.step(MoveIntent::default(), false, 0.0, DT);
            assert!(player.state.position.y < previous);
            previous = player.state.position.y;
        }
        for _ in 0..50 {
            player.step(MoveIntent::default(), false, 0.0, DT);
        }
        assert_eq!(player.state.position.y, 1.6);
        assert_eq!(player.state.velocity.y, 0.0);
        assert!(player.state.is_grounded());
    }

    #[test]
    fn test_gravity_and_damping_first_step() {
        let mut player = controller_at(10.0);
        player.state.velocity = Vec3::new(1.0, 0.0, 2.0);
        player.step(MoveIntent::default(), false, 0.0, DT);

        let decay = 1.0 - 10.0 * DT;
        assert!((player.state.velocity.x - decay).abs() < 1e-5);
        assert!((player.state.velocity.z - 2.0 * decay).abs() < 1e-5);
        assert!((player.state.velocity.y + 49.0 * DT).abs() < 1e-4);
    }

    #[test]
    fn test_forward_moves_along_negative_z() {
        let mut player = controller_at(1.6);
        for _ in 0..30 {
            player.step(forward(), false, 0.0, DT);
        }
        assert!(player.state.position.z < -1.0);
        assert!(player.state.position.x.abs() < 1e-4);
        assert_eq!(player.state.position.y, 1.6);
    }

    #[test]
    fn test_pitch_does_not_tilt_movement() {
        let camera = CameraConfig::default();
        let mut player = controller_at(1.6);
        player.state.look.set_pitch(1.4, &camera);
        for _ in 0..30 {
            player.step(forward(), false, 0.0, DT);
        }
        assert_eq!(player.state.position.y, 1.6);
        assert!(player.state.position.z < -1.0);
    }

    #[test]
    fn test_yaw_rotates_movement() {
        let mut player = controller_at(1.6);
        player.state.look.yaw = std::f32::consts::FRAC_PI_2;
        for _ in 0..30 {
            player.step(forward(), false, 0.0, DT);
        }
        assert!(player.state.position.x > 1.0);
        assert!(player.state.position.z.abs() < 1e-3);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = controller_at(1.6);
        player.step(MoveIntent::default(), false, 0.0, DT);
        assert!(player.state.is_grounded());

        let before = player.state.velocity.y;
        assert!(player.try_jump());
        assert!((player.state.velocity.y - before - 5.0).abs() < 1e-6);
        assert!(!player.state.is_grounded());

        // Second attempt before landing
        let airborne = player.state.velocity.y;
        assert!(!player.try_jump());
        assert_eq!(player.state.velocity.y, airborne);
    }

    #[test]
    fn test_jump_edge_during_step_leaves_ground() {
        let mut player = controller_at(1.6);
        player.step(MoveIntent::default(), false, 0.0, DT);
        let report = player.step(MoveIntent::default(), true, 0.0, DT);
        assert!(report.jumped);

        player.step(MoveIntent::default(), false, 0.0, DT);
        assert!(player.state.position.y > 1.6);
        assert!(!player.state.is_grounded());
    }

    #[test]
    fn test_raised_ground_raises_floor() {
        let mut player = controller_at(1.0);
        player.step(MoveIntent::default(), false, 2.0, DT);
        assert!((player.state.position.y - 3.6).abs() < 1e-6);
        assert!(player.state.is_grounded());
    }
}
