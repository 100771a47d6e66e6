//! Math utilities and types
//!
//! Provides the 2D math types used by the simulation. Screen convention:
//! +x right, +y down.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,

    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from its top-left corner and extents
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Create a box of the given extents centred on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    /// Box width
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Box height
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Centre point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap,
    /// which is what lets a resolved body rest flush against a wall.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Unit vector in the direction of `v`, or `None` for a zero-length vector
pub fn try_normalize(v: &Vec2) -> Option<Vec2> {
    let len = v.norm();
    if len > 0.0 {
        Some(v / len)
    } else {
        None
    }
}
