//! Gameplay events
//!
//! Systems push events while they run; the scheduler drains the queue once
//! per frame and hands the events to the caller alongside the draw list.
//! Delivery is always deferred: no handler runs inside a system's slot.

use crate::ecs::Entity;
use crate::foundation::math::Aabb;

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An entity began an attack swing
    AttackStarted {
        /// Who attacked
        attacker: Entity,
        /// World-space hitbox of the swing
        hitbox: Aabb,
    },
    /// An enemy was hit and queued for destruction
    EnemySlain {
        /// Who landed the hit
        attacker: Entity,
        /// The enemy that was destroyed
        enemy: Entity,
    },
}

/// FIFO buffer of events for the current frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for end-of-frame delivery
    pub fn push(&mut self, event: GameEvent) {
        log::trace!("event queued: {event:?}");
        self.events.push(event);
    }

    /// Take every queued event, leaving the queue empty
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
