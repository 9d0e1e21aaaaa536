//! Frame orchestrator
//!
//! Owns all simulation state and drives one strictly sequential update pass
//! per frame: drain queued input, look, kinematics, enemy behavior, combat
//! for each pending fire edge, then the HUD snapshot.

use canopy_core::{FrameClock, SessionId, Transform};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::camera::{CameraPose, Viewport};
use crate::combat::{self, ShotOutcome};
use crate::config::{ConfigError, SimulationConfig};
use crate::enemy::{EnemyId, EnemyManager};
use crate::events::GameEvent;
use crate::hud::HudSnapshot;
use crate::input::{InputEvent, InputLatch};
use crate::player::{PlayerController, PlayerState};
use crate::world::{FlatGround, World};

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Constructed, no frame run yet
    NotStarted,
    /// Frames advance player, enemies, and combat
    Running,
    /// Player died; only the HUD is refreshed
    GameOver,
}

/// Result of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Sanitized delta used for this frame
    pub delta: f32,
    pub phase: SimPhase,
    pub hud: HudSnapshot,
    /// Signals emitted during this frame, in order
    pub events: Vec<GameEvent>,
}

/// What the external renderer draws
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub camera: CameraPose,
    pub enemies: Vec<(EnemyId, Transform)>,
}

/// One independent simulation
pub struct Simulation<W: World = FlatGround> {
    session: SessionId,
    config: SimulationConfig,
    phase: SimPhase,
    clock: FrameClock,
    input: InputLatch,
    pending: Vec<InputEvent>,
    player: PlayerController,
    enemies: EnemyManager,
    world: W,
    viewport: Viewport,
    death_reported: bool,
    hud: HudSnapshot,
}

impl Simulation<FlatGround> {
    /// Create a simulation on flat ground with no enemies
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_world(config, FlatGround::default())
    }

    /// Create a simulation on flat ground and spawn the scenario's enemies
    pub fn from_scenario(config: SimulationConfig) -> Result<Self, ConfigError> {
        let mut simulation = Self::new(config)?;
        simulation.spawn_scenario_enemies();
        Ok(simulation)
    }
}

impl<W: World> Simulation<W> {
    /// Create a simulation over a custom world with no enemies.
    /// The config is validated first.
    pub fn with_world(config: SimulationConfig, world: W) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = SessionId::new();
        let player = PlayerController::new(
            config.scenario.player_start,
            config.movement.clone(),
            &config.player,
        );
        let enemies = EnemyManager::new(config.enemy.clone());
        let hud = HudSnapshot::capture(&player.state, enemies.len());
        debug!(%session, "simulation created");

        Ok(Self {
            session,
            clock: FrameClock::new(config.time.clone()),
            config,
            phase: SimPhase::NotStarted,
            input: InputLatch::new(),
            pending: Vec::new(),
            player,
            enemies,
            world,
            viewport: Viewport::default(),
            death_reported: false,
            hud,
        })
    }

    fn spawn_scenario_enemies(&mut self) {
        let scenario = &self.config.scenario;
        let mut rng = match scenario.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let extent = scenario.spawn_half_extent;
        let height = scenario.spawn_height;

        // Scaling a unit sample keeps the range finite for any finite extent
        for _ in 0..scenario.enemy_count {
            let x = rng.gen_range(-1.0..1.0_f32) * extent;
            let z = rng.gen_range(-1.0..1.0_f32) * extent;
            self.enemies.spawn(Vec3::new(x, height, z));
        }
        self.hud = HudSnapshot::capture(&self.player.state, self.enemies.len());
        info!(
            session = %self.session,
            enemies = self.enemies.len(),
            seed = ?scenario.seed,
            "scenario spawned"
        );
    }

    /// Spawn one enemy. Non-finite positions are rejected.
    pub fn spawn_enemy(&mut self, position: Vec3) -> Option<EnemyId> {
        let id = self.enemies.spawn(position)?;
        self.hud = HudSnapshot::capture(&self.player.state, self.enemies.len());
        Some(id)
    }

    // ---- Event intake ----

    /// Queue a raw input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn on_key_change(&mut self, code: KeyCode, pressed: bool) {
        self.push_input(InputEvent::Key { code, pressed });
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.push_input(InputEvent::MouseButton { button, pressed });
    }

    pub fn on_fire_attempt(&mut self) {
        self.push_input(InputEvent::FireAttempt);
    }

    pub fn on_jump_attempt(&mut self) {
        self.push_input(InputEvent::JumpAttempt);
    }

    pub fn on_look_delta(&mut self, dx: f32, dy: f32) {
        self.push_input(InputEvent::Look { dx, dy });
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.push_input(InputEvent::Resize { width, height });
    }

    pub fn on_cursor_captured(&mut self, captured: bool) {
        self.push_input(InputEvent::CursorCaptured(captured));
    }

    // ---- Frame driving ----

    /// Run one frame from a host timestamp in seconds
    pub fn tick(&mut self, timestamp: f64) -> FrameOutput {
        let delta = self.clock.tick(timestamp);
        self.run_frame(delta)
    }

    /// Run one frame with an explicit delta in seconds
    pub fn step(&mut self, delta: f32) -> FrameOutput {
        let delta = self.clock.advance(delta);
        self.run_frame(delta)
    }

    fn run_frame(&mut self, delta: f32) -> FrameOutput {
        let mut events = Vec::new();

        if self.phase == SimPhase::NotStarted {
            self.phase = SimPhase::Running;
            info!(session = %self.session, enemies = self.enemies.len(), "simulation running");
        }

        self.drain_input();

        if self.phase == SimPhase::Running {
            self.update_running(delta, &mut events);
        }
        if self.phase == SimPhase::GameOver {
            self.input.clear_edges();
        }

        self.hud = HudSnapshot::capture(&self.player.state, self.enemies.len());

        FrameOutput {
            frame: self.clock.frame_count(),
            delta,
            phase: self.phase,
            hud: self.hud,
            events,
        }
    }

    fn drain_input(&mut self) {
        for event in std::mem::take(&mut self.pending) {
            match event {
                InputEvent::Resize { width, height } => {
                    if !self.viewport.resize(width, height) {
                        debug!(width, height, "ignored degenerate resize");
                    }
                }
                other => self.input.apply(&other),
            }
        }
    }

    fn update_running(&mut self, delta: f32, events: &mut Vec<GameEvent>) {
        let look = self.input.take_look_delta();
        self.player.look(look, &self.config.camera);

        let intent = self.input.move_intent();
        let jump = self.input.consume_jump();
        let ground = self.world.ground_height(self.player.state.position);
        let kinematics = self.player.step(intent, jump, ground, delta);
        if kinematics.jumped {
            debug!(session = %self.session, "player jumped");
        }

        let report = self
            .enemies
            .update(self.player.state.position, delta, self.clock.elapsed());
        trace!(
            engaged = report.engaged,
            melee_damage = report.melee_damage,
            grounded = kinematics.grounded,
            "frame update"
        );
        let applied = self.player.state.apply_damage(report.melee_damage);
        if applied > 0.0 {
            events.push(GameEvent::PlayerDamaged { amount: applied });
        }

        if self.player.state.is_dead() {
            self.enter_game_over(events);
            return;
        }

        while self.input.consume_fire() {
            self.fire(events);
        }
    }

    fn fire(&mut self, events: &mut Vec<GameEvent>) {
        let Some(outcome) =
            combat::resolve_shot(&mut self.player.state, &mut self.enemies, &self.config.combat)
        else {
            return;
        };
        events.push(GameEvent::ShotFired);
        match outcome {
            ShotOutcome::Miss => {}
            ShotOutcome::Hit {
                id,
                remaining_health,
            } => events.push(GameEvent::EnemyHit {
                id,
                remaining_health,
            }),
            ShotOutcome::Killed { id } => events.push(GameEvent::EnemyKilled { id }),
        }
    }

    fn enter_game_over(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = SimPhase::GameOver;
        if self.death_reported {
            return;
        }
        self.death_reported = true;
        events.push(GameEvent::PlayerDied);
        warn!(
            session = %self.session,
            frame = self.clock.frame_count(),
            enemies = self.enemies.len(),
            "player died"
        );
    }

    // ---- Accessors ----

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player.state
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player.state
    }

    pub fn enemies(&self) -> &EnemyManager {
        &self.enemies
    }


    /// HUD snapshot from the most recent frame
    pub fn hud(&self) -> HudSnapshot {
        self.hud
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Camera pose and enemy transforms for the renderer
    pub fn render_state(&self) -> RenderState {
        RenderState {
            camera: CameraPose::new(
                self.player.state.position,
                self.player.state.look,
                self.viewport,
                &self.config.camera,
            ),
            enemies: self.enemies.transforms(),
        }
    }

    /// Tear down the simulation and return its final HUD
    pub fn shutdown(self) -> HudSnapshot {
        info!(
            session = %self.session,
            frames = self.clock.frame_count(),
            phase = ?self.phase,
            hud = %self.hud,
            "simulation stopped"
        );
        self.hud
    }
}
