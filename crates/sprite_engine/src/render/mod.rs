//! Frame atlas
//!
//! Pixels are the presentation layer's business. The engine only hands out
//! opaque [`FrameHandle`]s that a renderer resolves back to a source
//! rectangle in whatever sprite sheet it loaded.

use slotmap::{new_key_type, SlotMap};
use std::collections::HashMap;

new_key_type! {
    /// Handle to one sprite frame registered in a [`FrameAtlas`]
    pub struct FrameHandle;
}

/// Source rectangle of a frame inside its sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInfo {
    /// Unique frame name, e.g. `"player_walk_right_0"`
    pub name: String,
    /// Left edge in sheet pixels
    pub x: u32,
    /// Top edge in sheet pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Registry of every frame the game can draw
#[derive(Debug, Default)]
pub struct FrameAtlas {
    frames: SlotMap<FrameHandle, FrameInfo>,
    by_name: HashMap<String, FrameHandle>,
}

impl FrameAtlas {
    /// Create an empty atlas
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame, returning the existing handle if the name is taken
    pub fn register(&mut self, info: FrameInfo) -> FrameHandle {
        if let Some(&handle) = self.by_name.get(&info.name) {
            return handle;
        }
        let name = info.name.clone();
        let handle = self.frames.insert(info);
        self.by_name.insert(name, handle);
        handle
    }

    /// Look up a frame's source rectangle
    pub fn get(&self, handle: FrameHandle) -> Option<&FrameInfo> {
        self.frames.get(handle)
    }

    /// Look up a handle by frame name
    pub fn find(&self, name: &str) -> Option<FrameHandle> {
        self.by_name.get(name).copied()
    }

    /// Number of registered frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are registered
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(name: &str, x: u32) -> FrameInfo {
        FrameInfo { name: name.to_string(), x, y: 0, width: 16, height: 16 }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut atlas = FrameAtlas::new();
        let a = atlas.register(frame("a", 0));
        let b = atlas.register(frame("b", 16));

        assert_ne!(a, b);
        assert_eq!(atlas.get(b).unwrap().x, 16);
        assert_eq!(atlas.find("a"), Some(a));
        assert_eq!(atlas.len(), 2);
    }

    #[test]
    fn test_duplicate_name_reuses_handle() {
        let mut atlas = FrameAtlas::new();
        let first = atlas.register(frame("idle", 0));
        let second = atlas.register(frame("idle", 32));

        assert_eq!(first, second);
        assert_eq!(atlas.len(), 1);
        assert_eq!(atlas.get(first).unwrap().x, 0);
    }
}
