//! ECS World implementation
//!
//! The world owns one [`ComponentStorage`] per [`ComponentKind`] and the
//! queue of entities awaiting destruction. Destruction is deferred: rows are
//! only removed by [`World::flush_destructions`], which the scheduler calls
//! once per frame after every system has run.

use super::components::{
    AiBehavior, AnimationState, AttackState, Collider, InputControl, MovementState, RigidBody,
    Transform,
};
use super::{Component, ComponentKind, ComponentStorage, Entity};

/// ECS World containing all entities and components
#[derive(Debug, Default)]
pub struct World {
    next_entity_id: u32,
    entities: Vec<Entity>,
    pending_destruction: Vec<Entity>,

    pub(crate) transforms: ComponentStorage<Transform>,
    pub(crate) rigid_bodies: ComponentStorage<RigidBody>,
    pub(crate) movement_states: ComponentStorage<MovementState>,
    pub(crate) colliders: ComponentStorage<Collider>,
    pub(crate) animations: ComponentStorage<AnimationState>,
    pub(crate) ai_behaviors: ComponentStorage<AiBehavior>,
    pub(crate) input_controls: ComponentStorage<InputControl>,
    pub(crate) attacks: ComponentStorage<AttackState>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Add a component to an entity, overwriting any existing row of that kind
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if T::storage_mut(self).insert(entity, component).is_some() {
            log::trace!("{entity}: replaced {:?}", T::KIND);
        }
    }

    /// Remove a component from an entity immediately
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        T::storage_mut(self).remove(entity)
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::storage(self).get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        T::storage_mut(self).get_mut(entity)
    }

    /// Whether the entity currently holds a component of `kind`
    pub fn has_component(&self, entity: Entity, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transforms.contains(entity),
            ComponentKind::RigidBody => self.rigid_bodies.contains(entity),
            ComponentKind::MovementState => self.movement_states.contains(entity),
            ComponentKind::Collider => self.colliders.contains(entity),
            ComponentKind::AnimationState => self.animations.contains(entity),
            ComponentKind::AiBehavior => self.ai_behaviors.contains(entity),
            ComponentKind::InputControl => self.input_controls.contains(entity),
            ComponentKind::AttackState => self.attacks.contains(entity),
        }
    }

    fn kind_len(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Transform => self.transforms.len(),
            ComponentKind::RigidBody => self.rigid_bodies.len(),
            ComponentKind::MovementState => self.movement_states.len(),
            ComponentKind::Collider => self.colliders.len(),
            ComponentKind::AnimationState => self.animations.len(),
            ComponentKind::AiBehavior => self.ai_behaviors.len(),
            ComponentKind::InputControl => self.input_controls.len(),
            ComponentKind::AttackState => self.attacks.len(),
        }
    }

    fn kind_entities(&self, kind: ComponentKind) -> Vec<Entity> {
        match kind {
            ComponentKind::Transform => self.transforms.entities().collect(),
            ComponentKind::RigidBody => self.rigid_bodies.entities().collect(),
            ComponentKind::MovementState => self.movement_states.entities().collect(),
            ComponentKind::Collider => self.colliders.entities().collect(),
            ComponentKind::AnimationState => self.animations.entities().collect(),
            ComponentKind::AiBehavior => self.ai_behaviors.entities().collect(),
            ComponentKind::InputControl => self.input_controls.entities().collect(),
            ComponentKind::AttackState => self.attacks.entities().collect(),
        }
    }

    /// Entities holding every kind in `kinds`, in creation order.
    ///
    /// An empty `kinds` slice yields an empty result. The returned vector is
    /// a snapshot; it does not track later additions or destructions.
    pub fn query_entities(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        let Some(&smallest) = kinds.iter().min_by_key(|&&kind| self.kind_len(kind)) else {
            return Vec::new();
        };

        self.kind_entities(smallest)
            .into_iter()
            .filter(|&entity| kinds.iter().all(|&kind| self.has_component(entity, kind)))
            .collect()
    }

    /// Queue an entity for destruction at the end of the frame.
    ///
    /// Queuing an entity twice, or one that no longer exists, is a no-op.
    pub fn destroy_entity(&mut self, entity: Entity) {
        if self.pending_destruction.contains(&entity) {
            return;
        }
        if !self.entities.contains(&entity) {
            log::debug!("{entity}: destroy requested for unknown entity, ignoring");
            return;
        }
        self.pending_destruction.push(entity);
    }

    /// Whether the entity is queued for destruction this frame
    pub fn is_pending_destruction(&self, entity: Entity) -> bool {
        self.pending_destruction.contains(&entity)
    }

    /// Remove every queued entity's rows from every storage.
    ///
    /// Returns the number of entities removed. Calling this with an empty
    /// queue does nothing.
    pub fn flush_destructions(&mut self) -> usize {
        if self.pending_destruction.is_empty() {
            return 0;
        }

        let queue = std::mem::take(&mut self.pending_destruction);
        for &entity in &queue {
            self.transforms.remove(entity);
            self.rigid_bodies.remove(entity);
            self.movement_states.remove(entity);
            self.colliders.remove(entity);
            self.animations.remove(entity);
            self.ai_behaviors.remove(entity);
            self.input_controls.remove(entity);
            self.attacks.remove(entity);
            log::debug!("{entity}: destroyed");
        }
        self.entities.retain(|entity| !queue.contains(entity));
        queue.len()
    }

    /// Whether the entity has been created and not yet flushed
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.binary_search(&entity).is_ok()
    }

    /// Get an iterator over all live entities in creation order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{ColliderTag, Transform};

    #[test]
    fn test_create_entity_ids_are_unique_and_ordered() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        assert!(a < b);
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn test_get_missing_component_is_none() {
        let mut world = World::new();
        let entity = world.create_entity();
        assert!(world.get_component::<Transform>(entity).is_none());
        assert!(world.get_component_mut::<RigidBody>(entity).is_none());
    }

    #[test]
    fn test_add_component_overwrites() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(1.0, 2.0, 16.0, 16.0));
        world.add_component(entity, Transform::new(5.0, 6.0, 16.0, 16.0));

        let transform = world.get_component::<Transform>(entity).unwrap();
        assert_eq!(transform.position.x, 5.0);
        assert_eq!(world.query_entities(&[ComponentKind::Transform]).len(), 1);
    }

    #[test]
    fn test_query_intersection() {
        let mut world = World::new();
        let wall = world.create_entity();
        world.add_component(wall, Transform::new(0.0, 0.0, 32.0, 32.0));
        world.add_component(wall, Collider::solid(ColliderTag::WALL));

        let mover = world.create_entity();
        world.add_component(mover, Transform::new(50.0, 0.0, 16.0, 16.0));
        world.add_component(mover, RigidBody::new(80.0, 0.5));

        let decoration = world.create_entity();
        world.add_component(decoration, InputControl);

        assert_eq!(
            world.query_entities(&[ComponentKind::Transform]),
            vec![wall, mover]
        );
        assert_eq!(
            world.query_entities(&[ComponentKind::Transform, ComponentKind::Collider]),
            vec![wall]
        );
        assert_eq!(
            world.query_entities(&[ComponentKind::RigidBody, ComponentKind::Transform]),
            vec![mover]
        );
        assert!(world
            .query_entities(&[ComponentKind::InputControl, ComponentKind::Transform])
            .is_empty());
    }

    #[test]
    fn test_query_with_no_kinds_is_empty() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, InputControl);
        assert!(world.query_entities(&[]).is_empty());
    }

    #[test]
    fn test_destruction_is_deferred_until_flush() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Transform::new(0.0, 0.0, 16.0, 16.0));
        world.add_component(entity, MovementState::default());

        world.destroy_entity(entity);
        assert!(world.is_pending_destruction(entity));
        assert!(world.get_component::<Transform>(entity).is_some());
        assert_eq!(world.query_entities(&[ComponentKind::Transform]), vec![entity]);

        assert_eq!(world.flush_destructions(), 1);
        for kind in ComponentKind::ALL {
            assert!(!world.has_component(entity, kind));
            assert!(world.query_entities(&[kind]).is_empty());
        }
        assert!(world.get_component::<Transform>(entity).is_none());
        assert!(world.get_component::<MovementState>(entity).is_none());
        assert!(!world.contains(entity));
    }

    #[test]
    fn test_double_destroy_and_empty_flush() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, InputControl);

        world.destroy_entity(entity);
        world.destroy_entity(entity);
        assert_eq!(world.flush_destructions(), 1);
        assert_eq!(world.flush_destructions(), 0);

        // Already flushed: requesting again is ignored
        world.destroy_entity(entity);
        assert_eq!(world.flush_destructions(), 0);
    }

    #[test]
    fn test_ids_not_reused_after_flush() {
        let mut world = World::new();
        let first = world.create_entity();
        world.destroy_entity(first);
        world.flush_destructions();

        let second = world.create_entity();
        assert_ne!(first, second);
        assert!(world.get_component::<InputControl>(second).is_none());
    }
}
