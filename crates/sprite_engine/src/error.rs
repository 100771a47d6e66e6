//! Engine-level error type

use crate::config::ConfigError;
use crate::ecs::components::AnimationError;

/// Errors surfaced while setting up a simulation.
///
/// Per-frame logic never fails; everything here is caught at construction
/// or load time.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A flipbook was built from inconsistent data
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),
}
