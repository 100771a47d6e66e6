//! Transform component: where an entity is and how big it is

use crate::foundation::math::{Aabb, Vec2};

/// Position and extents of an entity in world space.
///
/// `position` is the top-left corner of the entity's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Top-left corner in world units
    pub position: Vec2,

    /// Width in world units
    pub width: f32,

    /// Height in world units
    pub height: f32,
}

impl Transform {
    /// Create a transform from a top-left corner and extents
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// World-space bounding box
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Centre of the bounding box
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 16.0, 16.0)
    }
}
