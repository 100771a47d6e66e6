//! Archetype factories
//!
//! Every kind of thing in the arena is a fixed bundle of components. The
//! factories here are the only place those bundles are assembled.

use sprite_engine::ecs::components::{
    AiBehavior, AttackState, Collider, ColliderTag, InputControl, MovementState, RigidBody,
    Transform,
};
use sprite_engine::ecs::{Entity, World};
use sprite_engine::foundation::math::Vec2;

use crate::assets::FlipbookLibrary;
use crate::GameError;

/// Player and monster sprite size in pixels
pub const ACTOR_SIZE: f32 = 16.0;

/// Player top speed in pixels per second
pub const PLAYER_SPEED: f32 = 80.0;

/// Player friction coefficient
pub const PLAYER_FRICTION: f32 = 4.0;

/// Monster top speed in pixels per second
pub const MONSTER_SPEED: f32 = 40.0;

/// Monster friction coefficient
pub const MONSTER_FRICTION: f32 = 2.0;

/// Builds the component bundles for each archetype
pub struct ArchetypeFactory;

impl ArchetypeFactory {
    /// Player: input-driven, solid, can attack
    pub fn spawn_player(
        world: &mut World,
        library: &FlipbookLibrary,
        position: Vec2,
    ) -> Result<Entity, GameError> {
        let animation = library.build("player")?;

        let entity = world.create_entity();
        world.add_component(entity, Transform::new(position.x, position.y, ACTOR_SIZE, ACTOR_SIZE));
        world.add_component(entity, RigidBody::new(PLAYER_SPEED, PLAYER_FRICTION));
        world.add_component(entity, MovementState::default());
        world.add_component(entity, Collider::solid(ColliderTag::PLAYER));
        world.add_component(entity, InputControl);
        world.add_component(entity, AttackState::default());
        world.add_component(entity, animation);

        log::debug!("spawned player {entity} at ({}, {})", position.x, position.y);
        Ok(entity)
    }

    /// Monster: patrols `waypoints`, killable, does not block movement
    pub fn spawn_monster(
        world: &mut World,
        library: &FlipbookLibrary,
        position: Vec2,
        waypoints: Vec<Vec2>,
    ) -> Result<Entity, GameError> {
        let animation = library.build("slime")?;

        let entity = world.create_entity();
        world.add_component(entity, Transform::new(position.x, position.y, ACTOR_SIZE, ACTOR_SIZE));
        world.add_component(entity, RigidBody::new(MONSTER_SPEED, MONSTER_FRICTION));
        world.add_component(entity, MovementState::default());
        world.add_component(entity, Collider::trigger(ColliderTag::ENEMY));
        world.add_component(entity, AiBehavior::patrol(waypoints));
        world.add_component(entity, animation);

        log::debug!("spawned monster {entity} at ({}, {})", position.x, position.y);
        Ok(entity)
    }

    /// Ghost: purely decorative, floats in place and never blocks
    pub fn spawn_ghost(
        world: &mut World,
        library: &FlipbookLibrary,
        position: Vec2,
    ) -> Result<Entity, GameError> {
        let animation = library.build("ghost")?;

        let entity = world.create_entity();
        world.add_component(entity, Transform::new(position.x, position.y, ACTOR_SIZE, ACTOR_SIZE));
        world.add_component(entity, Collider::trigger(ColliderTag::GHOST));
        world.add_component(entity, animation);

        log::debug!("spawned ghost {entity} at ({}, {})", position.x, position.y);
        Ok(entity)
    }

    /// Wall: static solid block
    pub fn spawn_wall(
        world: &mut World,
        library: &FlipbookLibrary,
        position: Vec2,
        size: f32,
    ) -> Result<Entity, GameError> {
        let animation = library.build("wall")?;

        let entity = world.create_entity();
        world.add_component(entity, Transform::new(position.x, position.y, size, size));
        world.add_component(entity, Collider::solid(ColliderTag::WALL));
        world.add_component(entity, animation);

        Ok(entity)
    }
}
