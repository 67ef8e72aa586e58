//! Pose-cycle table and the named positions within it.
//!
//! Battler art ships as numbered files, `1.png` through `11.png`: 1-3 idle,
//! 4 dead, 5-6 hurt, 7-8 approach/return, 9-11 attack. The state machine
//! tracks a pose-cycle index; the cycle table maps that index to the
//! 1-based file number to display.

/// Number of entries in the pose-cycle table.
pub const NUM_POSES: usize = 12;

/// Pose-cycle index -> 1-based pose file number.
///
/// The first four entries walk the idle loop (files 1,2,3,2); the rest map
/// straight through to their file numbers.
pub const ANIMATION_CYCLE: [usize; NUM_POSES] = [1, 2, 3, 2, 4, 5, 6, 7, 8, 9, 10, 11];

/// Length of the idle loop at the front of the cycle table.
pub const IDLE_CYCLE_LEN: usize = 4;

/// Pose-cycle index a battler settles on when an approach completes.
pub const POSE_IDLE_SETTLE: usize = 1;
/// Pose-cycle index of the dead pose.
pub const POSE_DEAD: usize = 4;
/// Pose-cycle index of the first hurt pose; the second hurt pose is the
/// next entry in the table.
pub const POSE_HURT_FIRST: usize = 5;
/// Pose-cycle index shown while closing on the target.
pub const POSE_ADVANCE: usize = 7;
/// Pose-cycle index shown on the return leg.
pub const POSE_RETREAT: usize = 8;
/// Pose-cycle indices of the three strike frames.
pub const POSE_STRIKE_1: usize = 9;
pub const POSE_STRIKE_2: usize = 10;
pub const POSE_STRIKE_3: usize = 11;
