//! Arena generation
//!
//! Walls are scattered with a seeded RNG so a given configuration always
//! produces the same arena. Placements that would trap the player or a
//! monster inside a wall are skipped rather than retried.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sprite_engine::ecs::{Entity, World};
use sprite_engine::foundation::math::{Aabb, Vec2};

use crate::archetypes::{ArchetypeFactory, ACTOR_SIZE};
use crate::assets::FlipbookLibrary;
use crate::config::GameConfig;
use crate::GameError;

/// Entities making up a freshly built arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// The player
    pub player: Entity,
    /// Monsters, in spawn order
    pub monsters: Vec<Entity>,
    /// Decorative ghosts
    pub ghosts: Vec<Entity>,
    /// Wall blocks that were placed
    pub walls: Vec<Entity>,
}

/// Spawn the arena described by `config` into `world`.
///
/// Spawn order is walls, player, monsters, ghosts; with equal layer and
/// height that is also the draw order.
pub fn generate(
    world: &mut World,
    library: &FlipbookLibrary,
    config: &GameConfig,
) -> Result<Level, GameError> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let reserved: Vec<Aabb> = std::iter::once(config.player_spawn)
        .chain(config.monsters.iter().map(|spawn| spawn.position))
        .map(|at| Aabb::new(at.x, at.y, ACTOR_SIZE, ACTOR_SIZE))
        .collect();

    let mut walls = Vec::new();
    for _ in 0..config.wall_count {
        let position = Vec2::new(
            rng.gen_range(0..=config.level_width) as f32,
            rng.gen_range(0..=config.level_height) as f32,
        );
        let block = Aabb::new(position.x, position.y, config.wall_size, config.wall_size);
        if reserved.iter().any(|spawn| spawn.overlaps(&block)) {
            log::debug!("skipping wall at ({}, {}): covers a spawn point", position.x, position.y);
            continue;
        }
        walls.push(ArchetypeFactory::spawn_wall(world, library, position, config.wall_size)?);
    }

    let player = ArchetypeFactory::spawn_player(world, library, config.player_spawn)?;

    let monsters = config
        .monsters
        .iter()
        .map(|spawn| ArchetypeFactory::spawn_monster(world, library, spawn.position, spawn.waypoints.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    let ghosts = config
        .ghosts
        .iter()
        .map(|&at| ArchetypeFactory::spawn_ghost(world, library, at))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "level built: {} walls, {} monsters, {} ghosts (seed {})",
        walls.len(),
        monsters.len(),
        ghosts.len(),
        config.seed
    );

    Ok(Level { player, monsters, ghosts, walls })
}
