//! Rigid body component for entities that move under the physics system

use crate::foundation::math::Vec2;

/// Velocity state and movement limits of a movable entity.
///
/// `acceleration` is an input channel: systems write intent into it each
/// frame and the physics system consumes and zeroes it after integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Requested acceleration for this tick, in units per second squared
    pub acceleration: Vec2,

    /// Friction coefficient applied while no acceleration is requested
    pub friction: f32,

    /// Speed limit in units per second
    pub max_speed: f32,
}

impl RigidBody {
    /// Create a body at rest
    pub fn new(max_speed: f32, friction: f32) -> Self {
        Self {
            velocity: Vec2::zeros(),
            acceleration: Vec2::zeros(),
            friction: friction.max(0.0),
            max_speed: max_speed.max(0.0),
        }
    }

    /// Builder pattern: start with a velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Stop all movement
    pub fn stop(&mut self) {
        self.velocity = Vec2::zeros();
        self.acceleration = Vec2::zeros();
    }
}
