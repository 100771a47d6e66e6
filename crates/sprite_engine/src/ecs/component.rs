//! Component trait and the closed set of component kinds

use super::{ComponentStorage, World};
use super::components::{
    AiBehavior, AnimationState, AttackState, Collider, InputControl, MovementState, RigidBody,
    Transform,
};

/// Every component kind the world can store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// [`Transform`]
    Transform,
    /// [`RigidBody`]
    RigidBody,
    /// [`MovementState`]
    MovementState,
    /// [`Collider`]
    Collider,
    /// [`AnimationState`]
    AnimationState,
    /// [`AiBehavior`]
    AiBehavior,
    /// [`InputControl`]
    InputControl,
    /// [`AttackState`]
    AttackState,
}

impl ComponentKind {
    /// All kinds, in declaration order
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Transform,
        ComponentKind::RigidBody,
        ComponentKind::MovementState,
        ComponentKind::Collider,
        ComponentKind::AnimationState,
        ComponentKind::AiBehavior,
        ComponentKind::InputControl,
        ComponentKind::AttackState,
    ];
}

/// A plain data record that can be attached to an entity.
///
/// Implementations bind a type to its [`ComponentKind`] and to the storage
/// array the [`World`] keeps for it; dispatch is resolved at compile time.
pub trait Component: Sized + 'static {
    /// Kind tag used by [`World::query_entities`]
    const KIND: ComponentKind;

    /// The world's storage for this kind
    fn storage(world: &World) -> &ComponentStorage<Self>;

    /// The world's storage for this kind, mutably
    fn storage_mut(world: &mut World) -> &mut ComponentStorage<Self>;
}

macro_rules! impl_component {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$kind;

            fn storage(world: &World) -> &ComponentStorage<Self> {
                &world.$field
            }

            fn storage_mut(world: &mut World) -> &mut ComponentStorage<Self> {
                &mut world.$field
            }
        }
    };
}

impl_component!(Transform, Transform, transforms);
impl_component!(RigidBody, RigidBody, rigid_bodies);
impl_component!(MovementState, MovementState, movement_states);
impl_component!(Collider, Collider, colliders);
impl_component!(AnimationState, AnimationState, animations);
impl_component!(AiBehavior, AiBehavior, ai_behaviors);
impl_component!(InputControl, InputControl, input_controls);
impl_component!(AttackState, AttackState, attacks);
