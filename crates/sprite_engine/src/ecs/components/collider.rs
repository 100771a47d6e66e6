//! Collider component

use bitflags::bitflags;

bitflags! {
    /// Classification of a collider. Physics ignores it; gameplay code uses it
    /// to decide who can be hit by what.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ColliderTag: u32 {
        /// The player character
        const PLAYER = 1 << 0;
        /// Something the player can slay
        const ENEMY = 1 << 1;
        /// Static level geometry
        const WALL = 1 << 2;
        /// Decorative spirit that floats through everything
        const GHOST = 1 << 3;
    }
}

/// Marks an entity as taking part in collision tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    /// Whether the collider blocks movement. Non-solid colliders are triggers.
    pub solid: bool,

    /// Classification
    pub tag: ColliderTag,
}

impl Collider {
    /// A blocking collider
    pub fn solid(tag: ColliderTag) -> Self {
        Self { solid: true, tag }
    }

    /// A non-blocking trigger volume
    pub fn trigger(tag: ColliderTag) -> Self {
        Self { solid: false, tag }
    }
}
