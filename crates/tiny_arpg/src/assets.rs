//! Flipbook assets
//!
//! The sprite sheet layout lives in `assets/flipbooks.ron` and is compiled
//! into the binary. Loading registers every frame in a [`FrameAtlas`] once;
//! archetypes then stamp out [`AnimationState`]s that share those handles.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use sprite_engine::ecs::components::{AnimationState, LoopMode};
use sprite_engine::render::{FrameAtlas, FrameHandle, FrameInfo};

use crate::GameError;

const EMBEDDED_SHEET: &str = include_str!("../assets/flipbooks.ron");

/// One clip: a row of equally sized frames on the sheet
#[derive(Debug, Clone, Deserialize)]
pub struct ClipDef {
    /// Clip name, `"<MOTION>_<FACING>"` for state-driven entities
    pub name: String,
    /// Sheet row holding the frames
    pub row: u32,
    /// Number of frames, read left to right
    pub frames: u32,
}

fn default_opacity() -> f32 {
    1.0
}

fn default_scale() -> f32 {
    1.0
}

/// Playback settings and clips of one archetype's flipbook
#[derive(Debug, Clone, Deserialize)]
pub struct FlipbookDef {
    /// Clip shown on spawn
    pub initial: String,
    /// Seconds per frame at speed 1
    pub frame_duration: f32,
    /// Playback mode for every clip
    #[serde(default)]
    pub loop_mode: LoopMode,
    /// Draw layer
    #[serde(default)]
    pub z_index: i32,
    /// Alpha
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Uniform scale
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Clips in sheet order
    pub clips: Vec<ClipDef>,
}

/// Whole sheet as written in the RON file
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDef {
    /// Frame width in pixels
    pub frame_width: u32,
    /// Frame height in pixels
    pub frame_height: u32,
    /// Flipbooks by archetype name
    pub flipbooks: BTreeMap<String, FlipbookDef>,
}

/// Registered frames plus the flipbook definitions that reference them
#[derive(Debug)]
pub struct FlipbookLibrary {
    atlas: FrameAtlas,
    flipbooks: BTreeMap<String, FlipbookDef>,
    clips: BTreeMap<String, HashMap<String, Vec<FrameHandle>>>,
}

impl FlipbookLibrary {
    /// Load the sheet compiled into the crate
    pub fn embedded() -> Result<Self, GameError> {
        Self::from_ron(EMBEDDED_SHEET)
    }

    /// Parse a sheet and register all of its frames
    pub fn from_ron(source: &str) -> Result<Self, GameError> {
        let sheet: SheetDef = ron::from_str(source)?;
        let mut atlas = FrameAtlas::new();
        let mut clips = BTreeMap::new();

        for (flipbook, def) in &sheet.flipbooks {
            let table: HashMap<String, Vec<FrameHandle>> = def
                .clips
                .iter()
                .map(|clip| {
                    let frames = (0..clip.frames)
                        .map(|column| {
                            atlas.register(FrameInfo {
                                name: format!("{flipbook}/{}/{column}", clip.name),
                                x: column * sheet.frame_width,
                                y: clip.row * sheet.frame_height,
                                width: sheet.frame_width,
                                height: sheet.frame_height,
                            })
                        })
                        .collect();
                    (clip.name.clone(), frames)
                })
                .collect();
            clips.insert(flipbook.clone(), table);
        }

        log::debug!(
            "loaded {} flipbooks with {} frames",
            sheet.flipbooks.len(),
            atlas.len()
        );

        Ok(Self {
            atlas,
            flipbooks: sheet.flipbooks,
            clips,
        })
    }

    /// Frame atlas backing every flipbook
    pub fn atlas(&self) -> &FrameAtlas {
        &self.atlas
    }

    /// Names of the defined flipbooks
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flipbooks.keys().map(String::as_str)
    }

    /// Build a fresh animation state for the named flipbook
    pub fn build(&self, name: &str) -> Result<AnimationState, GameError> {
        let (Some(def), Some(clips)) = (self.flipbooks.get(name), self.clips.get(name)) else {
            return Err(GameError::UnknownFlipbook(name.to_string()));
        };

        let state = AnimationState::new(clips.clone(), &def.initial, def.frame_duration)?
            .with_loop_mode(def.loop_mode)
            .with_z_index(def.z_index)
            .with_opacity(def.opacity)
            .with_scale(def.scale);
        Ok(state)
    }
}
