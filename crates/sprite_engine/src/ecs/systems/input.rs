//! Input system: turns the frame's movement vector into motion intent

use crate::ecs::components::{Facing, MotionState};
use crate::ecs::{ComponentKind, System, SystemContext, World};

/// Applies external input to every [`InputControl`](crate::ecs::components::InputControl) entity
#[derive(Debug, Default)]
pub struct InputSystem;

impl InputSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl System for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn run(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let movement = ctx.input.movement;
        let has_movement = movement.x != 0.0 || movement.y != 0.0;

        let controlled = world.query_entities(&[
            ComponentKind::InputControl,
            ComponentKind::RigidBody,
            ComponentKind::MovementState,
        ]);

        for entity in controlled {
            let (Some(body), Some(state)) = (
                world.rigid_bodies.get_mut(entity),
                world.movement_states.get_mut(entity),
            ) else {
                continue;
            };

            if has_movement {
                body.acceleration = movement * (body.max_speed * ctx.config.input_gain);
                state.motion = MotionState::Walk;
                if let Some(facing) = Facing::horizontal_priority(movement) {
                    state.facing = facing;
                }
            } else {
                state.motion = MotionState::Idle;
            }

            // Level-triggered: held means requested every frame
            if let Some(attack) = world.attacks.get_mut(entity) {
                attack.requested = ctx.input.attack;
            }
        }
    }
}
