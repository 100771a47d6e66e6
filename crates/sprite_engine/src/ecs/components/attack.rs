//! Melee attack state

use crate::foundation::math::Aabb;

/// Attack request and active swing of an entity that can fight
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttackState {
    /// Set by the input system when the attack button is held this frame
    pub requested: bool,

    /// Seconds left on the current swing
    pub timer: f32,

    /// World-space hitbox of the current swing
    pub hitbox: Option<Aabb>,
}

impl AttackState {
    /// Whether a swing is in progress
    pub fn is_active(&self) -> bool {
        self.hitbox.is_some()
    }
}
