//! System trait and implementations

use crate::config::SimulationConfig;
use crate::events::EventQueue;

use super::scheduler::FrameInput;

/// Everything a system may read besides the world during its slot
pub struct SystemContext<'a> {
    /// Seconds since the previous frame
    pub delta_time: f32,

    /// External input sampled for this frame
    pub input: &'a FrameInput,

    /// Simulation tuning
    pub config: &'a SimulationConfig,

    /// Events raised this frame
    pub events: &'a mut EventQueue,
}

impl<'a> SystemContext<'a> {
    /// Bundle the per-frame inputs of a system
    pub fn new(
        delta_time: f32,
        input: &'a FrameInput,
        config: &'a SimulationConfig,
        events: &'a mut EventQueue,
    ) -> Self {
        Self { delta_time, input, config, events }
    }
}

/// System trait for processing entities and components.
///
/// A system gets exclusive access to the world for the duration of `run`
/// and must not hold on to entity lists or component references after it
/// returns; the end-of-frame destruction flush may invalidate them.
pub trait System {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Run the system
    fn run(&mut self, world: &mut crate::ecs::World, ctx: &mut SystemContext<'_>);
}
