//! Marker for the entity driven by external input

/// Zero-sized marker: the entity receives the frame's movement/attack input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputControl;
