//! AI behavior component

use crate::foundation::math::Vec2;

/// High-level behavior an autonomous entity is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    /// Walk the waypoint loop, pausing at each stop
    #[default]
    Patrol,
}

/// Patrol route and progress of an autonomous entity
#[derive(Debug, Clone, PartialEq)]
pub struct AiBehavior {
    /// Current behavior
    pub state: AiState,

    /// Ordered patrol stops (top-left position targets)
    pub waypoints: Vec<Vec2>,

    /// Index of the stop currently being approached
    pub current_waypoint: usize,

    /// Seconds spent waiting at the current stop
    pub wait_timer: f32,
}

impl AiBehavior {
    /// Create a patrol over `waypoints`, starting at the first one
    pub fn patrol(waypoints: Vec<Vec2>) -> Self {
        Self {
            state: AiState::Patrol,
            waypoints,
            current_waypoint: 0,
            wait_timer: 0.0,
        }
    }

    /// The stop currently being approached, if there is one
    pub fn active_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.current_waypoint).copied()
    }

    /// Move on to the next stop, wrapping at the end of the route
    pub fn advance_waypoint(&mut self) {
        if !self.waypoints.is_empty() {
            self.current_waypoint = (self.current_waypoint + 1) % self.waypoints.len();
        }
        self.wait_timer = 0.0;
    }
}
