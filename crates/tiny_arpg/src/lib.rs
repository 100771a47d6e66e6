//! # Tiny ARPG
//!
//! A top-down action RPG slice built on `sprite_engine`: a player that walks
//! and swings a sword, patrolling monsters, decorative ghosts and a randomly
//! walled arena. The crate is headless; it produces draw lists and events
//! for whatever presentation layer is attached.

#![warn(missing_docs)]

pub mod archetypes;
pub mod assets;
pub mod config;
pub mod game;
pub mod level;

mod error;

pub use error::GameError;
pub use game::Game;
