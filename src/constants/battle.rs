//! Battle-layout limits and skill classification.

/// Fixed number of animated battler slots per battle.
pub const MAX_BATTLERS: usize = 8;

/// Highest skill id (exclusive) the cast-flag table covers.
pub const SKILL_FLAG_COUNT: usize = 1000;

/// Skill ids that trigger the full cast choreography with the screen
/// overlay: 96 earth spike, 97 poison, 98 dark strike.
pub const CAST_SKILLS: &[u16] = &[96, 97, 98];
