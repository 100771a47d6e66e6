//! AI system: patrol state machine
//!
//! Each tick a patroller either walks toward its active waypoint or, once
//! within the arrival threshold, idles there until the wait expires and then
//! targets the next waypoint. Steering is expressed as acceleration; the
//! physics system does the actual moving.

use crate::config::SimulationConfig;
use crate::ecs::components::{AiBehavior, AiState, Facing, MotionState, MovementState, RigidBody, Transform};
use crate::ecs::{ComponentKind, System, SystemContext, World};
use crate::foundation::math::try_normalize;

/// Drives every entity that has an [`AiBehavior`]
#[derive(Debug, Default)]
pub struct AiSystem;

impl AiSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    fn patrol(
        transform: &Transform,
        body: &mut RigidBody,
        state: &mut MovementState,
        ai: &mut AiBehavior,
        config: &SimulationConfig,
        delta_time: f32,
    ) {
        let Some(target) = ai.active_waypoint() else {
            state.motion = MotionState::Idle;
            return;
        };

        let offset = target - transform.position;
        if offset.norm() < config.arrival_threshold {
            state.motion = MotionState::Idle;
            ai.wait_timer += delta_time;
            if ai.wait_timer > config.patrol_wait {
                ai.advance_waypoint();
                log::trace!("patrol advanced to waypoint {}", ai.current_waypoint);
            }
            return;
        }

        // offset is at least arrival_threshold long here, unless the
        // threshold is zero and we sit exactly on the target
        let Some(direction) = try_normalize(&offset) else {
            state.motion = MotionState::Idle;
            return;
        };
        body.acceleration = direction * (body.max_speed * config.ai_gain);
        state.motion = MotionState::Walk;
        if let Some(facing) = Facing::dominant_axis(direction) {
            state.facing = facing;
        }
    }
}

impl System for AiSystem {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn run(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let agents = world.query_entities(&[
            ComponentKind::AiBehavior,
            ComponentKind::Transform,
            ComponentKind::RigidBody,
            ComponentKind::MovementState,
        ]);

        for entity in agents {
            let (Some(transform), Some(body), Some(state), Some(ai)) = (
                world.transforms.get(entity),
                world.rigid_bodies.get_mut(entity),
                world.movement_states.get_mut(entity),
                world.ai_behaviors.get_mut(entity),
            ) else {
                continue;
            };

            match ai.state {
                AiState::Patrol => {
                    Self::patrol(transform, body, state, ai, ctx.config, ctx.delta_time);
                }
            }
        }
    }
}
