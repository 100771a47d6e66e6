//! Game configuration

use serde::{Deserialize, Serialize};
use sprite_engine::config::{Config, ConfigError, SimulationConfig};
use sprite_engine::foundation::math::Vec2;

/// Where a monster starts and the loop it patrols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterSpawn {
    /// Top-left spawn position
    pub position: Vec2,

    /// Patrol stops, visited in order and then repeated
    pub waypoints: Vec<Vec2>,
}

/// Level layout and engine tuning for a play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for wall placement; the same seed always builds the same arena
    pub seed: u64,

    /// Number of wall placements attempted
    pub wall_count: u32,

    /// Edge length of a wall block in pixels
    pub wall_size: f32,

    /// Walls are placed with their top-left corner in `[0, level_width]`
    pub level_width: u32,

    /// Walls are placed with their top-left corner in `[0, level_height]`
    pub level_height: u32,

    /// Top-left spawn position of the player
    pub player_spawn: Vec2,

    /// Monster spawns
    pub monsters: Vec<MonsterSpawn>,

    /// Top-left positions of decorative ghosts
    pub ghosts: Vec<Vec2>,

    /// Frames the headless driver runs
    pub demo_frames: u32,

    /// Engine tuning
    pub simulation: SimulationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            wall_count: 15,
            wall_size: 32.0,
            level_width: 500,
            level_height: 400,
            player_spawn: Vec2::new(100.0, 80.0),
            monsters: vec![MonsterSpawn {
                position: Vec2::new(150.0, 150.0),
                waypoints: vec![
                    Vec2::new(150.0, 150.0),
                    Vec2::new(230.0, 150.0),
                    Vec2::new(230.0, 210.0),
                    Vec2::new(150.0, 210.0),
                ],
            }],
            ghosts: vec![Vec2::new(60.0, 220.0)],
            demo_frames: 600,
            simulation: SimulationConfig::default(),
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Check that the layout can be built and the engine tuning is sane
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wall_size.is_finite() && self.wall_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "wall_size",
                reason: format!("must be positive, got {}", self.wall_size),
            });
        }
        if let Some(spawn) = self.monsters.iter().find(|spawn| spawn.waypoints.is_empty()) {
            log::warn!(
                "monster at ({}, {}) has no waypoints and will stand still",
                spawn.position.x,
                spawn.position.y
            );
        }
        self.simulation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.wall_count, 15);
        assert_eq!(config.player_spawn, Vec2::new(100.0, 80.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_wall_size() {
        let config = GameConfig { wall_size: 0.0, ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "wall_size", .. })
        ));
    }

    #[test]
    fn test_bundled_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/game.toml");
        let config = GameConfig::load_from_file(path).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.player_spawn, Vec2::new(100.0, 80.0));
        assert_eq!(config.monsters.len(), 2);
        assert_eq!(config.simulation.viewport_width, 320.0);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = std::env::temp_dir().join("tiny_arpg_game_config_test.ron");
        let path = path.to_str().unwrap();
        let config = GameConfig { seed: 42, demo_frames: 10, ..GameConfig::default() };

        config.save_to_file(path).unwrap();
        let loaded = GameConfig::load_from_file(path).unwrap();
        let _ = std::fs::remove_file(path);

        assert_eq!(loaded, config);
    }
}
