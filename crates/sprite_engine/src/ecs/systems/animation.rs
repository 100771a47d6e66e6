//! Animation system: picks the flipbook clip for each entity's motion and
//! facing, then advances every flipbook by one tick.
//!
//! Clip keys are `"<MOTION>_<FACING>"`. Left-facing art is never stored;
//! `LEFT` is drawn as the `RIGHT` clip mirrored horizontally.

use crate::ecs::components::{AnimationState, Facing, MovementState};
use crate::ecs::{ComponentKind, System, SystemContext, World};

/// Drives every [`AnimationState`] in the world
#[derive(Debug, Default)]
pub struct AnimationSystem;

impl AnimationSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Facing name used in clip keys and whether the clip is mirrored
    fn clip_facing(facing: Facing) -> (&'static str, bool) {
        match facing {
            Facing::Left => (Facing::Right.as_str(), true),
            other => (other.as_str(), false),
        }
    }

    /// Clip name for `state`, falling back to the idle clip of the same
    /// facing. `None` when the table has neither.
    fn resolve_clip(state: &MovementState, anim: &AnimationState) -> Option<String> {
        let (facing, _) = Self::clip_facing(state.facing);

        let target = format!("{}_{}", state.motion.as_str(), facing);
        if anim.has_clip(&target) {
            return Some(target);
        }

        let idle = format!("IDLE_{facing}");
        anim.has_clip(&idle).then_some(idle)
    }

    fn select_clip(state: &MovementState, anim: &mut AnimationState) {
        let (_, flip_x) = Self::clip_facing(state.facing);
        anim.flip_x = flip_x;

        match Self::resolve_clip(state, anim) {
            Some(name) => {
                if anim.play(&name) {
                    log::trace!("switched clip to {name}");
                }
            }
            None => {
                log::warn!(
                    "no clip for {}_{} and no idle fallback; keeping '{}'",
                    state.motion.as_str(),
                    state.facing.as_str(),
                    anim.current_name()
                );
            }
        }
    }
}

impl System for AnimationSystem {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn run(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let driven = world.query_entities(&[ComponentKind::MovementState, ComponentKind::AnimationState]);
        for entity in driven {
            let (Some(state), Some(anim)) = (
                world.movement_states.get(entity),
                world.animations.get_mut(entity),
            ) else {
                continue;
            };
            Self::select_clip(state, anim);
        }

        // Decorative entities without a MovementState still animate
        for entity in world.query_entities(&[ComponentKind::AnimationState]) {
            if let Some(anim) = world.animations.get_mut(entity) {
                anim.advance(ctx.delta_time);
            }
        }
    }
}
