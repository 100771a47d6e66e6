//! Game-level error type

use sprite_engine::config::ConfigError;
use sprite_engine::ecs::components::AnimationError;
use sprite_engine::EngineError;

/// Errors raised while loading assets, configuration or building a level
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Engine setup failed
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Game configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A flipbook definition produced an unusable animation
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    /// The flipbook sheet is not valid RON
    #[error("Flipbook sheet error: {0}")]
    Sheet(#[from] ron::error::SpannedError),

    /// An archetype asked for a flipbook the sheet does not define
    #[error("Unknown flipbook '{0}'")]
    UnknownFlipbook(String),
}
