//! Canopy ECS - generational handles and slot storage
//!
//! Entities are addressed by a compact index + generation pair. Removing an
//! entity frees its slot without shifting the others, so handles held
//! elsewhere never silently point at a different entity.

mod arena;
mod entity;

pub use arena::Arena;
pub use entity::{Entity, EntityAllocator};
