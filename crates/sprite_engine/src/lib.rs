//! # Sprite Engine
//!
//! A small 2D runtime for top-down action games, built around a
//! statically-typed Entity-Component-System and a fixed per-frame pipeline.
//!
//! ## Features
//!
//! - **Sparse ECS**: one dense-indexed sparse array per component kind
//! - **Arcade Physics**: acceleration/friction integrator with axis-separated
//!   collision resolution (wall sliding)
//! - **Patrol AI**: waypoint state machine for autonomous entities
//! - **Flipbook Animation**: state-driven clip selection with loop, once and
//!   ping-pong playback
//! - **Deterministic Draw Order**: stable `(z, y)` sorted draw list
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut world = World::new();
//!     let mut scheduler = Scheduler::new(SimulationConfig::default());
//!
//!     let player = world.create_entity();
//!     world.add_component(player, Transform::new(100.0, 80.0, 16.0, 16.0));
//!     world.add_component(player, RigidBody::new(80.0, 0.5));
//!     world.add_component(player, MovementState::default());
//!     world.add_component(player, InputControl);
//!     scheduler.track(player);
//!
//!     let input = FrameInput { movement: Vec2::new(1.0, 0.0), attack: false };
//!     let output = scheduler.run_frame(&mut world, &input, 1.0 / 60.0);
//!     println!("{} draw records", output.draw_list.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod ecs;
pub mod render;

mod error;

pub use error::EngineError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        EngineError,
        config::{Config, ConfigError, SimulationConfig},
        events::{EventQueue, GameEvent},
        foundation::math::{Aabb, Vec2},
        ecs::{
            World, Entity, Component, ComponentKind, System,
            scheduler::{Scheduler, FrameInput, FrameOutput},
            components::{
                Transform, RigidBody, MovementState, MotionState, Facing,
                Collider, ColliderTag, AnimationState, AnimationError, LoopMode,
                AiBehavior, AiState, InputControl, AttackState,
            },
            systems::DrawRecord,
        },
        render::{FrameAtlas, FrameHandle},
    };
}
