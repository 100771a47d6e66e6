//! ECS Components module
//!
//! Pure data records. Behaviour lives in `ecs::systems`.

pub mod transform;
pub mod rigid_body;
pub mod movement;
pub mod collider;
pub mod animation;
pub mod ai;
pub mod input_control;
pub mod attack;

pub use transform::Transform;
pub use rigid_body::RigidBody;
pub use movement::{MovementState, MotionState, Facing};
pub use collider::{Collider, ColliderTag};
pub use animation::{AnimationState, AnimationError, LoopMode};
pub use ai::{AiBehavior, AiState};
pub use input_control::InputControl;
pub use attack::AttackState;
