//! Sparse component storage
//!
//! One `ComponentStorage<T>` exists per component kind. Rows are indexed by
//! entity id; a `None` slot means the entity does not carry the component.

use super::Entity;

/// Sparse array of one component kind, indexed by entity id
#[derive(Debug, Clone)]
pub struct ComponentStorage<T> {
    data: Vec<Option<T>>,
    count: usize,
}

impl<T> ComponentStorage<T> {
    /// Create empty storage
    pub fn new() -> Self {
        Self { data: Vec::new(), count: 0 }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Insert a component, replacing any existing row for the entity
    pub fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        let idx = entity.index();
        self.ensure_capacity(idx);
        let previous = self.data[idx].replace(component);
        if previous.is_none() {
            self.count += 1;
        }
        previous
    }

    /// Remove the entity's row, returning it if present
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let removed = self.data.get_mut(entity.index()).and_then(Option::take);
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Borrow the entity's row
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(entity.index()).and_then(Option::as_ref)
    }

    /// Mutably borrow the entity's row
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(entity.index()).and_then(Option::as_mut)
    }

    /// Whether the entity has a row
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Number of occupied rows
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no rows are occupied
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Entities holding this component, in ascending id order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(idx, _)| Entity::new(idx as u32))
    }

    /// Iterate over `(entity, component)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|c| (Entity::new(idx as u32), c)))
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
