//! Per-battler animation state.
//!
//! One `BattlerSlot` per battler position holds everything the animator
//! knows about that battler: the pose cycle position, the hurt countdown,
//! the last HP seen, and the three screen positions an attack choreography
//! moves between.

use glam::IVec2;
use thiserror::Error;

use crate::constants::IDLE_CYCLE_LEN;

/// A battler id outside the slot array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("battler slot {slot} out of range (capacity {capacity})")]
pub struct SlotOutOfRange {
    pub slot: usize,
    pub capacity: usize,
}

// =============================================================================
// APPROACH PHASE
// =============================================================================

/// Movement phase of one battler's attack choreography.
///
/// The move-frame counter only exists while a sequence is running, so a
/// finished or cancelled sequence cannot leave a stale counter behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Approach {
    /// At rest.
    #[default]
    None,
    /// Walking to the target, striking, then jump-arcing back home.
    Melee {
        /// Ticks since the sequence started.
        move_frame: i32,
        /// Position in the return-leg jump arc table.
        jump_tick: usize,
    },
    /// Short forward step with the screen overlay cued mid-sequence.
    Cast {
        /// Ticks since the sequence started.
        move_frame: i32,
    },
}

// =============================================================================
// BATTLER SLOT
// =============================================================================

/// Animation state for one battler slot.
#[derive(Debug, Clone)]
pub struct BattlerSlot {
    /// Position in the 12-entry pose cycle (0-11).
    pub pose_index: usize,
    /// Draw calls of hurt flash remaining; 0 when not flashing.
    pub hurt_timer: i32,
    /// HP seen on the previous draw, for damage/heal detection.
    pub last_hp: i32,
    /// Resting position, captured from the host on first sighting.
    pub source: IVec2,
    /// Where the active approach is headed.
    pub dest: IVec2,
    /// Position the battler is drawn at this tick.
    pub current: IVec2,
    /// Whether `source` has been captured yet.
    pub source_captured: bool,
    /// Active movement phase.
    pub approach: Approach,
}

impl BattlerSlot {
    /// Fresh slot with the starting idle pose rotated by slot index, so a
    /// row of identical monsters doesn't animate in lockstep.
    pub fn new(index: usize) -> Self {
        Self {
            pose_index: index % IDLE_CYCLE_LEN,
            hurt_timer: 0,
            last_hp: 0,
            source: IVec2::ZERO,
            dest: IVec2::ZERO,
            current: IVec2::ZERO,
            source_captured: false,
            approach: Approach::None,
        }
    }

    /// Return the slot to its freshly-constructed state.
    pub fn reset(&mut self, index: usize) {
        *self = Self::new(index);
    }

    /// Record the host-reported position as this battler's resting spot.
    /// Only the first call per battle takes effect.
    pub fn capture_source(&mut self, at: IVec2) {
        if !self.source_captured {
            self.source = at;
            self.current = at;
            self.source_captured = true;
        }
    }

    /// Step the idle pose cycle one position. No-op while the hurt flash
    /// or an approach is running, which both own the pose.
    pub fn step_idle_pose(&mut self) {
        if self.hurt_timer == 0 && self.approach == Approach::None {
            self.pose_index = (self.pose_index + 1) % IDLE_CYCLE_LEN;
        }
    }

    /// Whether any attack choreography is running.
    pub fn is_approaching(&self) -> bool {
        self.approach != Approach::None
    }

    /// Whether the running choreography is a cast.
    pub fn is_casting(&self) -> bool {
        matches!(self.approach, Approach::Cast { .. })
    }

    /// Ticks into the running choreography, or 0 at rest.
    pub fn move_frame(&self) -> i32 {
        match self.approach {
            Approach::None => 0,
            Approach::Melee { move_frame, .. } => move_frame,
            Approach::Cast { move_frame } => move_frame,
        }
    }
}
