//! Tick thresholds for the movement and reaction timelines.
//!
//! Every duration in this crate counts render ticks against a 60
//! ticks-per-second reference rate. A host running at a different rate
//! must scale all of these together.

use super::poses::{POSE_STRIKE_1, POSE_STRIKE_2, POSE_STRIKE_3};

/// Reference tick rate all thresholds below are derived from.
pub const TICKS_PER_SECOND: i32 = 60;

/// Frame-clock ticks between idle pose steps (6 steps/second at 60 tps).
pub const IDLE_STEP_TICKS: i32 = 10;

/// Render ticks the hurt pose is held after taking damage.
pub const HURT_DURATION_TICKS: i32 = 30;
/// The two hurt poses swap every this many frame-clock ticks.
pub const HURT_FLIP_TICKS: i32 = 5;

/// Manhattan distance (px) from the resting spot treated as "arrived".
/// A tolerance for integer lerp rounding, not an exact-zero test.
pub const ARRIVE_TOLERANCE_PX: i32 = 3;

// Melee timeline: walk out, strike on fixed ticks, jump-arc back home.

/// Ticks the outbound melee walk takes; the position lands exactly on the
/// destination on the final tick.
pub const MELEE_ADVANCE_TICKS: i32 = 20;
/// Move frames that flip to a strike pose, paired with the pose to show.
pub const MELEE_STRIKES: [(i32, usize); 3] =
    [(25, POSE_STRIKE_1), (30, POSE_STRIKE_2), (35, POSE_STRIKE_3)];
/// Move frame that rearms the jump arc for the return leg.
pub const MELEE_JUMP_RESET_TICK: i32 = 35;
/// Melee return movement runs on move frames strictly greater than this.
pub const MELEE_RETURN_AFTER: i32 = 50;
/// Ticks the melee return lerp spans.
pub const MELEE_RETURN_TICKS: i32 = 20;
/// Earliest move frame a melee approach may complete on.
pub const MELEE_SETTLE_TICK: i32 = 71;

// Cast timeline: same shape, compressed, no jump arc.

/// Ticks of the short forward step a casting battler takes.
pub const CAST_ADVANCE_TICKS: i32 = 5;
/// Move frame on which the overlay is anchored and cued.
pub const CAST_CUE_TICK: i32 = 10;
/// Move frames that flip to a strike pose, paired with the pose to show.
pub const CAST_STRIKES: [(i32, usize); 3] =
    [(15, POSE_STRIKE_1), (20, POSE_STRIKE_2), (25, POSE_STRIKE_3)];
/// Cast return movement runs on move frames strictly greater than this.
pub const CAST_RETURN_AFTER: i32 = 70;
/// Ticks the cast return lerp spans.
pub const CAST_RETURN_TICKS: i32 = 5;
/// A cast approach completes on move frames strictly greater than this.
pub const CAST_SETTLE_AFTER: i32 = 75;

/// Pixels a casting battler steps forward from its resting spot.
pub const CAST_STEP_PX: i32 = 10;
/// Gap (px) left between a melee attacker and its target's position.
pub const MELEE_TARGET_GAP_PX: i32 = 20;

/// Vertical offsets (px) traced across the melee return leg, one entry per
/// return tick, held at the table's end. Draws a small recoil jump.
pub const JUMP_ARC: [i32; 20] = [
    0, -3, -5, -7, -9, -11, -12, -13, -13, -14, -14, -13, -13, -12, -11, -9, -7, -5, -3, 0,
];
