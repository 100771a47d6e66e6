//! Physics system: arcade integrator with axis-separated collision
//!
//! Per movable entity and tick:
//! 1. integrate acceleration into velocity, or apply friction when there is
//!    no acceleration,
//! 2. clamp speed to `max_speed`,
//! 3. clear the acceleration,
//! 4. move along X and push out of solid colliders,
//! 5. move along Y (from the corrected X) and push out again.
//!
//! Resolving the axes separately is what lets an entity slide along a wall
//! it is pressed against.

use crate::ecs::components::{RigidBody, Transform};
use crate::ecs::{ComponentKind, Entity, System, SystemContext, World};
use crate::foundation::math::{try_normalize, Aabb, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn low(self, aabb: &Aabb) -> f32 {
        match self {
            Axis::X => aabb.min.x,
            Axis::Y => aabb.min.y,
        }
    }

    fn high(self, aabb: &Aabb) -> f32 {
        match self {
            Axis::X => aabb.max.x,
            Axis::Y => aabb.max.y,
        }
    }

    fn extent(self, aabb: &Aabb) -> f32 {
        self.high(aabb) - self.low(aabb)
    }
}

/// Integrates rigid bodies and resolves collisions against solid colliders
#[derive(Debug, Default)]
pub struct PhysicsSystem;

impl PhysicsSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

/// Steps 1-3: integrate, apply friction, clamp, and consume the acceleration
pub fn integrate_body(body: &mut RigidBody, delta_time: f32, friction_scale: f32) {
    if body.acceleration.x != 0.0 || body.acceleration.y != 0.0 {
        body.velocity += body.acceleration * delta_time;
    } else if let Some(direction) = try_normalize(&body.velocity) {
        let friction = direction * (body.friction * friction_scale * delta_time);
        if friction.norm() >= body.velocity.norm() {
            // Would overshoot through zero and reverse; stop dead instead
            body.velocity = Vec2::zeros();
        } else {
            body.velocity -= friction;
        }
    }

    let speed = body.velocity.norm();
    if speed > body.max_speed {
        body.velocity *= body.max_speed / speed;
    }

    body.acceleration = Vec2::zeros();
}

/// Snapped coordinate for `aabb` after moving along `axis` with signed
/// `velocity`, or `None` if nothing solid overlaps it.
///
/// With several overlapping obstacles the one met first along the direction
/// of travel wins (the smallest leading edge when moving forward, the largest
/// trailing edge when moving backward), so the result clears all of them.
fn resolve_axis(aabb: &Aabb, obstacles: &[Aabb], axis: Axis, velocity: f32) -> Option<f32> {
    let mut hits = obstacles.iter().filter(|other| aabb.overlaps(other)).peekable();
    hits.peek()?;

    let snapped = if velocity > 0.0 {
        let leading_edge = hits.map(|other| axis.low(other)).fold(f32::INFINITY, f32::min);
        leading_edge - axis.extent(aabb)
    } else if velocity < 0.0 {
        hits.map(|other| axis.high(other)).fold(f32::NEG_INFINITY, f32::max)
    } else {
        axis.low(aabb)
    };

    Some(snapped)
}

impl System for PhysicsSystem {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn run(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let delta_time = ctx.delta_time;
        let friction_scale = ctx.config.friction_scale;

        let solids: Vec<Entity> = world
            .query_entities(&[ComponentKind::Collider, ComponentKind::Transform])
            .into_iter()
            .filter(|&entity| world.colliders.get(entity).is_some_and(|c| c.solid))
            .collect();

        let movers = world.query_entities(&[ComponentKind::Transform, ComponentKind::RigidBody]);

        for entity in movers {
            let (Some(mut body), Some(mut transform)) = (
                world.rigid_bodies.get(entity).copied(),
                world.transforms.get(entity).copied(),
            ) else {
                continue;
            };

            integrate_body(&mut body, delta_time, friction_scale);

            // Obstacles are read fresh so bodies resolved earlier this tick
            // are seen at their new positions.
            let obstacles: Vec<Aabb> = solids
                .iter()
                .filter(|&&other| other != entity)
                .filter_map(|&other| world.transforms.get(other).map(Transform::aabb))
                .collect();

            transform.position.x += body.velocity.x * delta_time;
            if let Some(x) = resolve_axis(&transform.aabb(), &obstacles, Axis::X, body.velocity.x) {
                transform.position.x = x;
                body.velocity.x = 0.0;
            }

            transform.position.y += body.velocity.y * delta_time;
            if let Some(y) = resolve_axis(&transform.aabb(), &obstacles, Axis::Y, body.velocity.y) {
                transform.position.y = y;
                body.velocity.y = 0.0;
            }

            if let Some(stored) = world.rigid_bodies.get_mut(entity) {
                *stored = body;
            }
            if let Some(stored) = world.transforms.get_mut(entity) {
                *stored = transform;
            }
        }
    }
}
