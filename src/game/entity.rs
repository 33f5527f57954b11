//! Entity ids with generational indices
//!
//! Entities are lightweight identifiers. Each slot has a generation counter
//! that increments when the slot is reused, so a stale id held by a system
//! (e.g. one still sitting in a dispersed processing queue) never matches
//! a newer entity in the same slot.
//!
//! The allocator also keeps the live set in spawn order. Dispersed systems
//! enqueue that slice once per interval, so its order is the processing order.

/// A unique identifier for a game entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Index into the entity storage
    index: u32,
    /// Generation counter - increments when slot is reused
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// A null/invalid entity reference.
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

/// Allocates entity ids and tracks which are alive.
pub struct EntityAllocator {
    /// Generation counter for each slot
    generations: Vec<u32>,
    /// Free slots available for reuse (LIFO)
    free_indices: Vec<u32>,
    /// Live entities in spawn order
    alive: Vec<Entity>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            alive: Vec::new(),
        }
    }

    /// Allocate a new entity.
    pub fn allocate(&mut self) -> Entity {
        let entity = if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped on free
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            Entity::new(index, 0)
        };
        self.alive.push(entity);
        entity
    }

    /// Free an entity, making its slot available for reuse.
    /// Returns true if the entity was alive and is now freed.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
        // Linear, but entity counts here are in the hundreds
        self.alive.retain(|&e| e != entity);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        if entity.is_null() {
            return false;
        }
        let idx = entity.index as usize;
        idx < self.generations.len() && self.generations[idx] == entity.generation
    }

    /// Live entities, oldest first
    pub fn alive(&self) -> &[Entity] {
        &self.alive
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);
        assert!(alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));

        assert!(alloc.free(e1));
        assert!(!alloc.free(e1));
        assert_eq!(alloc.alive_count(), 1);
        assert!(!alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));
    }

    #[test]
    fn test_generation_prevents_reuse_collision() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        alloc.free(e1);

        let e2 = alloc.allocate();
        assert_eq!(e2.index(), e1.index());
        assert_ne!(e2.generation(), e1.generation());
        assert!(!alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));
    }

    #[test]
    fn test_alive_keeps_spawn_order() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        let c = alloc.allocate();
        alloc.free(b);
        let d = alloc.allocate();

        assert_eq!(alloc.alive(), &[a, c, d]);
    }

    #[test]
    fn test_null_entity() {
        let alloc = EntityAllocator::new();
        assert!(!alloc.is_alive(Entity::NULL));
        assert!(Entity::NULL.is_null());
    }
}
