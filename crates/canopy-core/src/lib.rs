//! Canopy Core - Core types and utilities for the Canopy simulation
//!
//! This crate provides the foundational types shared by the simulation crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform used for the render handoff
//! - Session identifiers for telling simulations apart in logs
//! - Frame clock that turns host timestamps into sanitized deltas

pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use time::{FrameClock, TimeConfig};
pub use types::{SessionId, Transform};
