//! Camera that keeps one entity centred in the viewport

use crate::config::SimulationConfig;
use crate::ecs::components::Transform;
use crate::ecs::{Entity, World};
use crate::foundation::math::Vec2;

/// World-to-screen offset that follows a tracked entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    target: Option<Entity>,
    offset: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera at the origin tracking nothing
    pub fn new() -> Self {
        Self {
            target: None,
            offset: Vec2::zeros(),
        }
    }

    /// Follow `entity` from the next update on
    pub fn track(&mut self, entity: Entity) {
        self.target = Some(entity);
    }

    /// Entity being followed, if any
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Offset to subtract from world positions to get screen positions
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Re-centre on the tracked entity.
    ///
    /// If the entity is gone or has no transform the camera stays where
    /// it was.
    pub fn update(&mut self, world: &World, config: &SimulationConfig) {
        let Some(target) = self.target else {
            return;
        };
        let Some(transform) = world.get_component::<Transform>(target) else {
            log::trace!("camera target {target} has no transform, holding position");
            return;
        };

        let half_viewport = Vec2::new(config.viewport_width * 0.5, config.viewport_height * 0.5);
        self.offset = transform.position - half_viewport;
    }
}
