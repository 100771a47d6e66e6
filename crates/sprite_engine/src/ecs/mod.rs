//! Entity-Component-System implementation
//!
//! Component kinds are a closed, statically known set. Each kind lives in its
//! own sparse array indexed by entity id, so lookups are a bounds check and
//! queries are a scan of the smallest participating array.

pub mod world;
pub mod entity;
pub mod storage;
pub mod component;
pub mod system;
pub mod scheduler;
pub mod components;
pub mod systems;

#[cfg(test)]
mod tests;

pub use world::World;
pub use entity::Entity;
pub use storage::ComponentStorage;
pub use component::{Component, ComponentKind};
pub use system::{System, SystemContext};
