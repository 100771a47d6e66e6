//! Game session: the world, the frame pipeline and the loaded assets

use sprite_engine::ecs::scheduler::{FrameInput, FrameOutput, Scheduler};
use sprite_engine::ecs::World;
use sprite_engine::events::GameEvent;

use crate::assets::FlipbookLibrary;
use crate::config::GameConfig;
use crate::level::{self, Level};
use crate::GameError;

/// Running totals for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Frames stepped
    pub frames: u64,
    /// Attack swings started
    pub attacks: u32,
    /// Enemies slain
    pub enemies_slain: u32,
}

/// One play session
pub struct Game {
    world: World,
    scheduler: Scheduler,
    library: FlipbookLibrary,
    level: Level,
    stats: SessionStats,
}

impl Game {
    /// Load assets, build the arena and point the camera at the player
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let library = FlipbookLibrary::embedded()?;
        let mut world = World::new();
        let level = level::generate(&mut world, &library, config)?;

        let mut scheduler = Scheduler::new(config.simulation.clone());
        scheduler.track(level.player);

        Ok(Self {
            world,
            scheduler,
            library,
            level,
            stats: SessionStats::default(),
        })
    }

    /// Advance the session by one frame
    pub fn step(&mut self, input: &FrameInput, delta_time: f32) -> FrameOutput {
        let output = self.scheduler.run_frame(&mut self.world, input, delta_time);

        self.stats.frames += 1;
        for event in &output.events {
            match event {
                GameEvent::AttackStarted { .. } => self.stats.attacks += 1,
                GameEvent::EnemySlain { enemy, .. } => {
                    self.stats.enemies_slain += 1;
                    self.level.monsters.retain(|monster| monster != enemy);
                }
            }
        }

        output
    }

    /// The simulated world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for scripted setups
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Entities of the arena; slain monsters are dropped from the list
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Frame atlas resolving the handles in draw records
    pub fn library(&self) -> &FlipbookLibrary {
        &self.library
    }

    /// Totals so far
    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprite_engine::ecs::components::{Facing, MotionState, MovementState, Transform};
    use sprite_engine::foundation::math::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn quiet_config() -> GameConfig {
        GameConfig {
            wall_count: 0,
            ghosts: Vec::new(),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_player_walks_and_camera_follows() {
        let mut game = Game::new(&quiet_config()).unwrap();
        let player = game.level().player;

        let input = FrameInput { movement: Vec2::new(1.0, 0.0), attack: false };
        let mut output = game.step(&input, DT);
        for _ in 0..29 {
            output = game.step(&input, DT);
        }

        let transform = game.world().get_component::<Transform>(player).unwrap();
        assert!(transform.position.x > 110.0);
        assert_eq!(output.camera_offset, transform.position - Vec2::new(160.0, 120.0));
        let state = game.world().get_component::<MovementState>(player).unwrap();
        assert_eq!(state.motion, MotionState::Walk);
        assert_eq!(state.facing, Facing::Right);
        assert_eq!(game.stats().frames, 30);
    }

    #[test]
    fn test_slaying_a_monster_updates_level_and_stats() {
        let mut game = Game::new(&quiet_config()).unwrap();
        let player = game.level().player;
        let monster = game.level().monsters[0];
        let player_pos = game.world().get_component::<Transform>(player).unwrap().position;
        {
            let world = game.world_mut();
            world.get_component_mut::<Transform>(monster).unwrap().position = player_pos + Vec2::new(0.0, 18.0);
        }

        let output = game.step(&FrameInput { movement: Vec2::zeros(), attack: true }, DT);

        assert!(output.events.contains(&GameEvent::EnemySlain { attacker: player, enemy: monster }));
        assert!(!game.world().contains(monster));
        assert!(!game.level().monsters.contains(&monster));
        assert_eq!(game.stats().enemies_slain, 1);
        assert_eq!(game.stats().attacks, 1);
    }

    #[test]
    fn test_draw_list_resolves_in_atlas() {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        let output = game.step(&FrameInput::default(), DT);

        assert_eq!(output.draw_list.len(), game.world().entity_count());
        for record in &output.draw_list {
            assert!(game.library().atlas().get(record.frame).is_some());
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig { wall_size: -1.0, ..GameConfig::default() };
        assert!(matches!(Game::new(&config), Err(GameError::Config(_))));
    }
}
