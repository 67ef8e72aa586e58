//! Cast overlay strip layout and placement.

use glam::IVec2;

/// Number of frames in the cast effect strip.
pub const CAST_FRAME_COUNT: usize = 13;
/// Draw calls each overlay frame is held for.
pub const CAST_FRAME_TICKS: u32 = 7;
/// Offset from the caster anchor to the frame's top-left corner.
pub const CAST_DRAW_BIAS: IVec2 = IVec2::new(-48, -68);
/// Overlay blend opacity (0 transparent, 255 opaque).
pub const CAST_OPACITY: u8 = 120;
