//! Render ordering
//!
//! Collects every drawable entity into a flat list sorted back to front.
//! Rasterising the list is the presentation layer's job.

use crate::ecs::{ComponentKind, Entity, World};
use crate::foundation::math::Vec2;
use crate::render::FrameHandle;

/// One sprite to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRecord {
    /// Entity the sprite belongs to
    pub entity: Entity,

    /// Top-left corner in world space
    pub position: Vec2,

    /// Frame to blit
    pub frame: FrameHandle,

    /// Mirror horizontally
    pub flip_x: bool,

    /// Rotation in radians
    pub rotation: f32,

    /// Alpha in `[0, 1]`
    pub opacity: f32,

    /// Uniform scale
    pub scale: f32,

    /// Layer; lower layers are drawn first
    pub z_index: i32,
}

/// Build the draw list for the current world state.
///
/// Sorted by `z_index`, then by the vertical position so lower sprites
/// overlap higher ones. The sort is stable, so full ties keep creation
/// order. Entities whose active clip yields no frame are left out.
pub fn collect_draw_list(world: &World) -> Vec<DrawRecord> {
    let mut records: Vec<DrawRecord> = world
        .query_entities(&[ComponentKind::Transform, ComponentKind::AnimationState])
        .into_iter()
        .filter_map(|entity| {
            let transform = world.transforms.get(entity)?;
            let anim = world.animations.get(entity)?;
            let frame = anim.current_frame()?;
            Some(DrawRecord {
                entity,
                position: transform.position,
                frame,
                flip_x: anim.flip_x,
                rotation: anim.rotation,
                opacity: anim.opacity,
                scale: anim.scale,
                z_index: anim.z_index,
            })
        })
        .collect();

    records.sort_by(|a, b| {
        a.z_index
            .cmp(&b.z_index)
            .then_with(|| a.position.y.total_cmp(&b.position.y))
    });
    records
}
