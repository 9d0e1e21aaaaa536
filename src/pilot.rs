//! Scripted input source for headless runs
//!
//! Turns toward the nearest enemy, walks in until it is within a standoff
//! distance, and pulls the trigger on a fixed cadence.

use std::f32::consts::{PI, TAU};

use canopy_game::{CameraConfig, Look, Simulation, World};
use glam::{Vec2, Vec3};
use winit::keyboard::KeyCode;

pub struct Pilot {
    /// Frames between trigger pulls
    fire_interval: u64,
    /// Stop walking once the nearest enemy is this close
    standoff: f32,
    walking: bool,
}

impl Pilot {
    pub fn new(fire_interval: u64, standoff: f32) -> Self {
        Self {
            fire_interval: fire_interval.max(1),
            standoff,
            walking: false,
        }
    }

    /// Queue this frame's input. Must run before the frame is ticked.
    pub fn drive<W: World>(&mut self, simulation: &mut Simulation<W>, frame: u64) {
        let eye = simulation.player().position;
        let look = simulation.player().look;

        let nearest = simulation
            .enemies()
            .iter()
            .map(|enemy| enemy.position)
            .min_by(|a, b| a.distance_squared(eye).total_cmp(&b.distance_squared(eye)));

        let Some(target) = nearest else {
            self.set_walking(simulation, false);
            return;
        };

        let delta = aim_delta(eye, look, target, &simulation.config().camera);
        if delta != Vec2::ZERO {
            simulation.on_look_delta(delta.x, delta.y);
        }

        let distance = target.distance(eye);
        self.set_walking(simulation, distance > self.standoff);

        if frame % self.fire_interval == 0 && distance <= simulation.config().combat.range {
            simulation.on_fire_attempt();
        }
    }

    fn set_walking<W: World>(&mut self, simulation: &mut Simulation<W>, walking: bool) {
        if self.walking != walking {
            self.walking = walking;
            simulation.on_key_change(KeyCode::KeyW, walking);
        }
    }
}

/// Mouse delta (pixels) that turns `look` from `eye` onto `target`
pub fn aim_delta(eye: Vec3, look: Look, target: Vec3, camera: &CameraConfig) -> Vec2 {
    let to_target = target - eye;
    let horizontal = Vec2::new(to_target.x, to_target.z).length();
    if horizontal <= f32::EPSILON || camera.sensitivity <= 0.0 {
        return Vec2::ZERO;
    }

    let yaw = to_target.x.atan2(-to_target.z);
    let pitch = to_target.y.atan2(horizontal);

    let yaw_turn = (yaw - look.yaw + PI).rem_euclid(TAU) - PI;
    let pitch_turn = pitch - look.pitch;

    Vec2::new(yaw_turn, -pitch_turn) / camera.sensitivity
}
