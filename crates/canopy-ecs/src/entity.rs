use std::fmt;

use serde::{Deserialize, Serialize};

/// Generational handle: a slot index plus the generation the slot had when
/// the handle was issued.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Entity {
    /// Build a handle from raw parts (mainly for testing).
    pub fn from_raw(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Bumped each time the slot is freed.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, Copy)]
struct SlotMeta {
    generation: u32,
    occupied: bool,
}

/// Hands out slot indices and tracks which handles are still current.
#[derive(Debug, Clone, Default)]
pub struct EntityAllocator {
    slots: Vec<SlotMeta>,
    vacant: Vec<u32>,
    live: usize,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a handle, reusing the most recently freed slot first.
    pub fn allocate(&mut self) -> Entity {
        self.live += 1;
        let index = match self.vacant.pop() {
            Some(index) => index,
            None => {
                self.slots.push(SlotMeta {
                    generation: 0,
                    occupied: false,
                });
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.occupied = true;
        Entity {
            index,
            generation: slot.generation,
        }
    }

    /// Free the handle's slot. Stale handles are rejected with `false`.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        let Some(slot) = self.current_slot_mut(entity) else {
            return false;
        };
        slot.occupied = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(entity.index);
        self.live -= 1;
        true
    }

    /// Whether the handle still refers to an occupied slot of its generation.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.slots
            .get(entity.index as usize)
            .is_some_and(|slot| slot.occupied && slot.generation == entity.generation)
    }

    fn current_slot_mut(&mut self, entity: Entity) -> Option<&mut SlotMeta> {
        self.slots
            .get_mut(entity.index as usize)
            .filter(|slot| slot.occupied && slot.generation == entity.generation)
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_slots_are_sequential() {
        let mut alloc = EntityAllocator::new();
        let handles: Vec<_> = (0..3).map(|_| alloc.allocate()).collect();
        let indices: Vec<_> = handles.iter().map(Entity::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(handles.iter().all(|e| e.generation() == 0));
        assert_eq!(alloc.len(), 3);
    }

    #[test]
    fn freed_slot_comes_back_with_new_generation() {
        let mut alloc = EntityAllocator::new();
        let first = alloc.allocate();
        alloc.allocate();
        assert!(alloc.deallocate(first));

        let reused = alloc.allocate();
        assert_eq!(reused, Entity::from_raw(0, 1));
        assert!(!alloc.is_alive(first));
        assert!(alloc.is_alive(reused));
    }

    #[test]
    fn stale_and_unknown_handles_rejected() {
        let mut alloc = EntityAllocator::new();
        let e = alloc.allocate();
        assert!(alloc.deallocate(e));
        assert!(!alloc.deallocate(e));
        assert!(!alloc.deallocate(Entity::from_raw(42, 0)));
        assert!(alloc.is_empty());
    }

    #[test]
    fn display_shows_index_and_generation() {
        assert_eq!(Entity::from_raw(3, 2).to_string(), "3v2");
    }
}
