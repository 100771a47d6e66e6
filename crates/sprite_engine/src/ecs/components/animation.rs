//! Flipbook animation component
//!
//! An [`AnimationState`] owns a table of named clips, each an ordered,
//! non-empty list of [`FrameHandle`]s, plus the playback cursor and the
//! visual flags the presentation layer applies when drawing the frame.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::render::FrameHandle;

/// How playback continues after the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopMode {
    /// Wrap back to the first frame
    #[default]
    Loop,
    /// Stop on the last frame
    Once,
    /// Bounce back and forth
    PingPong,
}

/// Errors raised when building a flipbook from inconsistent data
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A clip was declared with no frames
    #[error("clip '{0}' has no frames")]
    EmptyClip(String),

    /// The frame duration cannot drive a timer
    #[error("frame duration must be a positive number of seconds, got {0}")]
    InvalidFrameDuration(f32),

    /// The starting clip is not in the table
    #[error("initial clip '{0}' is not defined")]
    UnknownClip(String),
}

/// Flipbook playback state
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    clips: HashMap<String, Vec<FrameHandle>>,
    current: String,
    frame_index: usize,
    frame_timer: f32,
    direction: i32,

    /// Seconds each frame is shown at speed 1.0
    pub frame_duration: f32,

    /// Playback speed multiplier
    pub speed: f32,

    /// Playback mode
    pub loop_mode: LoopMode,

    /// Mirror the frame horizontally
    pub flip_x: bool,

    /// Rotation in radians
    pub rotation: f32,

    /// Opacity, 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,

    /// Uniform scale
    pub scale: f32,

    /// Draw layer; higher layers are drawn later
    pub z_index: i32,
}

impl AnimationState {
    /// Build a flipbook.
    ///
    /// Every clip must have at least one frame, the frame duration must be
    /// positive, and `initial` must name one of the clips.
    pub fn new(
        clips: HashMap<String, Vec<FrameHandle>>,
        initial: &str,
        frame_duration: f32,
    ) -> Result<Self, AnimationError> {
        if let Some((name, _)) = clips.iter().find(|(_, frames)| frames.is_empty()) {
            return Err(AnimationError::EmptyClip(name.clone()));
        }
        if !frame_duration.is_finite() || frame_duration <= 0.0 {
            return Err(AnimationError::InvalidFrameDuration(frame_duration));
        }
        if !clips.contains_key(initial) {
            return Err(AnimationError::UnknownClip(initial.to_string()));
        }

        Ok(Self {
            clips,
            current: initial.to_string(),
            frame_index: 0,
            frame_timer: 0.0,
            direction: 1,
            frame_duration,
            speed: 1.0,
            loop_mode: LoopMode::Loop,
            flip_x: false,
            rotation: 0.0,
            opacity: 1.0,
            scale: 1.0,
            z_index: 0,
        })
    }

    /// Builder pattern: set the loop mode
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Builder pattern: set the playback speed (negative speeds clamp to 0)
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    /// Builder pattern: set the draw layer
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builder pattern: set the opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: set the uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Name of the active clip
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// Whether a clip with this name exists
    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Index of the displayed frame within the active clip
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Seconds accumulated towards the next frame
    pub fn frame_timer(&self) -> f32 {
        self.frame_timer
    }

    /// Ping-pong travel direction, `1` or `-1`
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Number of frames in the active clip
    pub fn frame_count(&self) -> usize {
        self.clips.get(&self.current).map_or(0, Vec::len)
    }

    /// Handle of the displayed frame, if the active clip has one
    pub fn current_frame(&self) -> Option<FrameHandle> {
        self.clips
            .get(&self.current)
            .and_then(|frames| frames.get(self.frame_index))
            .copied()
    }

    /// Switch to `name`, restarting playback.
    ///
    /// Returns `false` and leaves playback untouched if the clip is already
    /// active or does not exist.
    pub fn play(&mut self, name: &str) -> bool {
        if self.current == name || !self.clips.contains_key(name) {
            return false;
        }
        self.current = name.to_string();
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.direction = 1;
        true
    }

    /// Advance the playback timer by `delta_time` seconds, stepping at most
    /// one frame per call.
    pub fn advance(&mut self, delta_time: f32) {
        self.frame_timer += delta_time * self.speed;
        if self.frame_timer < self.frame_duration {
            return;
        }
        self.frame_timer = 0.0;

        let count = self.frame_count();
        if count <= 1 {
            self.frame_index = 0;
            return;
        }

        match self.loop_mode {
            LoopMode::Loop => {
                self.frame_index = (self.frame_index + 1) % count;
            }
            LoopMode::Once => {
                if self.frame_index + 1 < count {
                    self.frame_index += 1;
                }
            }
            LoopMode::PingPong => {
                // Turns around one step early so the end frames are never
                // shown twice in a row.
                let last = count as i32 - 1;
                let mut next = self.frame_index as i32 + self.direction;
                if next > last {
                    next = last - 1;
                    self.direction = -1;
                } else if next < 0 {
                    next = 1;
                    self.direction = 1;
                }
                self.frame_index = next as usize;
            }
        }
    }
}
