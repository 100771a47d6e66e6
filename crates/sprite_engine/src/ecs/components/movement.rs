//! Discrete movement state used to pick animations

use crate::foundation::math::Vec2;

/// Whether the entity is trying to move this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Standing still
    #[default]
    Idle,
    /// Moving under its own intent
    Walk,
}

impl MotionState {
    /// Name used in animation keys
    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle => "IDLE",
            MotionState::Walk => "WALK",
        }
    }
}

/// One of four cardinal facings. Diagonals are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// Towards -y
    Up,
    /// Towards +y
    #[default]
    Down,
    /// Towards -x
    Left,
    /// Towards +x
    Right,
}

impl Facing {
    /// Name used in animation keys
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Up => "UP",
            Facing::Down => "DOWN",
            Facing::Left => "LEFT",
            Facing::Right => "RIGHT",
        }
    }

    /// Unit vector pointing the way the entity faces (screen space, +y down)
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Horizontal-priority facing: any non-zero x wins, y only decides when
    /// x is exactly zero. Used for player input.
    pub fn horizontal_priority(direction: Vec2) -> Option<Facing> {
        if direction.x > 0.0 {
            Some(Facing::Right)
        } else if direction.x < 0.0 {
            Some(Facing::Left)
        } else if direction.y > 0.0 {
            Some(Facing::Down)
        } else if direction.y < 0.0 {
            Some(Facing::Up)
        } else {
            None
        }
    }

    /// Dominant-axis facing: the axis with the larger magnitude wins, ties go
    /// to the horizontal axis. Used for AI steering.
    pub fn dominant_axis(direction: Vec2) -> Option<Facing> {
        if direction.x == 0.0 && direction.y == 0.0 {
            return None;
        }
        if direction.x.abs() >= direction.y.abs() {
            Some(if direction.x > 0.0 { Facing::Right } else { Facing::Left })
        } else {
            Some(if direction.y > 0.0 { Facing::Down } else { Facing::Up })
        }
    }
}

/// Motion and facing of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementState {
    /// Idle or walking
    pub motion: MotionState,

    /// Current facing
    pub facing: Facing,
}

impl MovementState {
    /// Create a movement state
    pub fn new(motion: MotionState, facing: Facing) -> Self {
        Self { motion, facing }
    }
}
