//! ECS Systems module
//!
//! Run order is fixed by [`Scheduler`](crate::ecs::scheduler::Scheduler):
//! input, AI, physics, animation, combat, then the destruction flush,
//! camera and draw-list collection.

pub mod input;
pub mod ai;
pub mod physics;
pub mod animation;
pub mod combat;
pub mod render_order;
pub mod camera;

pub use input::InputSystem;
pub use ai::AiSystem;
pub use physics::PhysicsSystem;
pub use animation::AnimationSystem;
pub use combat::CombatSystem;
pub use render_order::{collect_draw_list, DrawRecord};
pub use camera::Camera;
