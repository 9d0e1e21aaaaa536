//! Canopy Game - per-frame first-person simulation
//!
//! Turns discrete key/mouse events and frame timestamps into player motion,
//! enemy behavior, and hit-scan combat, and projects the result into a HUD
//! snapshot and a render handoff.

pub mod camera;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod events;
pub mod hud;
pub mod input;
pub mod player;
pub mod simulation;
pub mod world;

pub use camera::{CameraConfig, CameraPose, Look, Viewport};
pub use combat::{CombatConfig, ShotOutcome};
pub use config::{ConfigError, ScenarioConfig, SimulationConfig};
pub use enemy::{Enemy, EnemyConfig, EnemyId, EnemyManager, EnemyState};
pub use events::GameEvent;
pub use hud::HudSnapshot;
pub use input::{InputAction, InputBindings, InputEvent, InputLatch, MoveIntent};
pub use player::{MovementConfig, PlayerConfig, PlayerController, PlayerState};
pub use simulation::{FrameOutput, RenderState, SimPhase, Simulation};
pub use world::{FlatGround, TargetQuery, World};
