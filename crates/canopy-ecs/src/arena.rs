use crate::entity::{Entity, EntityAllocator};

/// Slot storage addressed by generational [`Entity`] handles.
///
/// Iteration visits live values in slot order, which stays stable across
/// removals.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    allocator: EntityAllocator,
    slots: Vec<Option<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            slots: Vec::new(),
        }
    }

    /// Insert a value built from its own handle.
    pub fn insert_with(&mut self, build: impl FnOnce(Entity) -> T) -> Entity {
        let entity = self.allocator.allocate();
        let idx = entity.index as usize;
        if idx == self.slots.len() {
            self.slots.push(None);
        }
        self.slots[idx] = Some(build(entity));
        entity
    }

    /// Insert a value and return its handle.
    pub fn insert(&mut self, value: T) -> Entity {
        self.insert_with(|_| value)
    }

    /// Remove a value. Stale or unknown handles return `None`.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        if !self.allocator.deallocate(entity) {
            return None;
        }
        self.slots[entity.index as usize].take()
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.slots[entity.index as usize].as_ref()
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.slots[entity.index as usize].as_mut()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.allocator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocator.is_empty()
    }

    /// Live values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Live values in slot order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}
