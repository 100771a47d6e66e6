//! Frame scheduling
//!
//! Runs the logic systems in a fixed order, one at a time, then performs the
//! end-of-frame work: destruction flush, camera update and draw-list
//! collection. Reordering the slots changes which clip the animation system
//! sees and which positions the combat system tests against, so the order is
//! not configurable.

use crate::config::SimulationConfig;
use crate::events::{EventQueue, GameEvent};
use crate::foundation::math::Vec2;

use super::system::{System, SystemContext};
use super::systems::{
    collect_draw_list, AiSystem, AnimationSystem, Camera, CombatSystem, DrawRecord, InputSystem,
    PhysicsSystem,
};
use super::{Entity, World};

/// External input sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Unit-length or zero movement direction; zero means no input
    pub movement: Vec2,

    /// Attack button held
    pub attack: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            movement: Vec2::zeros(),
            attack: false,
        }
    }
}

/// Everything the presentation layer needs after a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Sprites in draw order
    pub draw_list: Vec<DrawRecord>,

    /// Camera offset to subtract from world positions
    pub camera_offset: Vec2,

    /// Events raised during the frame, in emission order
    pub events: Vec<GameEvent>,

    /// Number of entities removed by the destruction flush
    pub destroyed: usize,
}

/// Fixed-order frame pipeline
pub struct Scheduler {
    config: SimulationConfig,
    systems: Vec<Box<dyn System>>,
    camera: Camera,
    events: EventQueue,
    frame: u64,
}

impl Scheduler {
    /// Create a scheduler with the standard system order
    pub fn new(config: SimulationConfig) -> Self {
        let systems: Vec<Box<dyn System>> = vec![
            Box::new(InputSystem::new()),
            Box::new(AiSystem::new()),
            Box::new(PhysicsSystem::new()),
            Box::new(AnimationSystem::new()),
            Box::new(CombatSystem::new()),
        ];

        log::debug!(
            "scheduler order: {}",
            systems.iter().map(|s| s.name()).collect::<Vec<_>>().join(" -> ")
        );

        Self {
            config,
            systems,
            camera: Camera::new(),
            events: EventQueue::new(),
            frame: 0,
        }
    }

    /// Keep `entity` centred in the viewport
    pub fn track(&mut self, entity: Entity) {
        self.camera.track(entity);
    }

    /// Active simulation settings
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame of `delta_time` seconds.
    ///
    /// A negative or non-finite `delta_time` is treated as zero.
    pub fn run_frame(&mut self, world: &mut World, input: &FrameInput, delta_time: f32) -> FrameOutput {
        let delta_time = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            log::warn!("frame {}: invalid delta time {delta_time}, using 0", self.frame);
            0.0
        };

        {
            let mut ctx = SystemContext::new(delta_time, input, &self.config, &mut self.events);
            for system in &mut self.systems {
                log::trace!("frame {}: running {}", self.frame, system.name());
                system.run(world, &mut ctx);
            }
        }

        let destroyed = world.flush_destructions();
        self.camera.update(world, &self.config);
        let draw_list = collect_draw_list(world);

        self.frame += 1;

        FrameOutput {
            draw_list,
            camera_offset: self.camera.offset(),
            events: self.events.drain(),
            destroyed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{InputControl, MovementState, RigidBody, Transform};
    use crate::ecs::ComponentKind;
    use approx::assert_relative_eq;

    fn spawn_player(world: &mut World) -> Entity {
        let player = world.create_entity();
        world.add_component(player, Transform::new(100.0, 80.0, 16.0, 16.0));
        world.add_component(player, RigidBody::new(80.0, 0.5));
        world.add_component(player, MovementState::default());
        world.add_component(player, InputControl);
        player
    }

    #[test]
    fn test_run_frame_moves_player_and_camera() {
        let mut world = World::new();
        let player = spawn_player(&mut world);
        let mut scheduler = Scheduler::new(SimulationConfig::default());
        scheduler.track(player);

        let input = FrameInput { movement: Vec2::new(1.0, 0.0), attack: false };
        let output = scheduler.run_frame(&mut world, &input, 0.1);

        let transform = world.get_component::<Transform>(player).unwrap();
        assert!(transform.position.x > 100.0);
        assert_relative_eq!(output.camera_offset.x, transform.position.x - 160.0);
        assert_relative_eq!(output.camera_offset.y, 80.0 - 120.0);
        assert_eq!(scheduler.frame_count(), 1);
    }

    #[test]
    fn test_invalid_delta_time_is_zero() {
        let mut world = World::new();
        let player = spawn_player(&mut world);
        world
            .get_component_mut::<RigidBody>(player)
            .unwrap()
            .velocity = Vec2::new(50.0, 0.0);
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        scheduler.run_frame(&mut world, &FrameInput::default(), -1.0);
        scheduler.run_frame(&mut world, &FrameInput::default(), f32::NAN);

        let transform = world.get_component::<Transform>(player).unwrap();
        assert_eq!(transform.position, Vec2::new(100.0, 80.0));
    }

    #[test]
    fn test_queued_destruction_is_flushed_by_frame() {
        let mut world = World::new();
        let player = spawn_player(&mut world);
        let mut scheduler = Scheduler::new(SimulationConfig::default());

        world.destroy_entity(player);
        let output = scheduler.run_frame(&mut world, &FrameInput::default(), 1.0 / 60.0);

        assert_eq!(output.destroyed, 1);
        assert!(!world.contains(player));
        assert!(world.query_entities(&[ComponentKind::Transform]).is_empty());
    }
}
