//! Headless Tiny ARPG driver
//!
//! Builds the arena, feeds a scripted input pattern through the frame
//! pipeline at 60 Hz and logs what happened. Pass a `.toml` or `.ron`
//! config path as the first argument to override the defaults.

use sprite_engine::config::Config;
use sprite_engine::ecs::scheduler::FrameInput;
use sprite_engine::events::GameEvent;
use sprite_engine::foundation::logging;
use sprite_engine::foundation::math::Vec2;
use tiny_arpg::config::GameConfig;
use tiny_arpg::{Game, GameError};

const FRAME_TIME: f32 = 1.0 / 60.0;

/// Walk a square, swinging the sword for a few frames every 1.5 seconds
fn scripted_input(frame: u32) -> FrameInput {
    let movement = match (frame / 60) % 4 {
        0 => Vec2::new(1.0, 0.0),
        1 => Vec2::new(0.0, 1.0),
        2 => Vec2::new(-1.0, 0.0),
        _ => Vec2::new(0.0, -1.0),
    };
    FrameInput {
        movement,
        attack: frame % 90 < 6,
    }
}

fn main() -> Result<(), GameError> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            GameConfig::load_from_file(&path)?
        }
        None => GameConfig::default(),
    };

    let mut game = Game::new(&config)?;
    log::info!(
        "Running {} frames with {} entities",
        config.demo_frames,
        game.world().entity_count()
    );

    let mut last_output = None;
    for frame in 0..config.demo_frames {
        let output = game.step(&scripted_input(frame), FRAME_TIME);
        for event in &output.events {
            match event {
                GameEvent::AttackStarted { attacker, hitbox } => {
                    log::debug!("frame {frame}: {attacker} swings at ({}, {})", hitbox.min.x, hitbox.min.y);
                }
                GameEvent::EnemySlain { enemy, .. } => {
                    log::info!("frame {frame}: enemy {enemy} slain");
                }
            }
        }
        last_output = Some(output);
    }

    let stats = game.stats();
    log::info!(
        "Done: {} frames, {} attacks, {} enemies slain, {} monsters left",
        stats.frames,
        stats.attacks,
        stats.enemies_slain,
        game.level().monsters.len()
    );
    if let Some(output) = last_output {
        log::info!(
            "Final frame: {} sprites, camera at ({:.1}, {:.1})",
            output.draw_list.len(),
            output.camera_offset.x,
            output.camera_offset.y
        );
        for record in output.draw_list.iter().take(5) {
            if let Some(frame) = game.library().atlas().get(record.frame) {
                log::debug!(
                    "  {} z={} at ({:.1}, {:.1}) -> {}{}",
                    record.entity,
                    record.z_index,
                    record.position.x,
                    record.position.y,
                    frame.name,
                    if record.flip_x { " (flipped)" } else { "" }
                );
            }
        }
    }

    Ok(())
}
