//! Global frame clock driving the idle-pose cadence.

use crate::constants::IDLE_STEP_TICKS;

/// Shared tick counter cycling with a fixed period.
///
/// Advances once per battle frame. The rollover is the beat on which every
/// resting battler steps its idle pose (once per 10 ticks, six steps a
/// second at the reference rate); the raw value picks which of the two
/// hurt poses a flashing battler shows.
#[derive(Debug, Clone)]
pub struct FrameClock {
    ticks: i32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Advance one tick. Returns true on rollover.
    pub fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= IDLE_STEP_TICKS {
            self.ticks = 0;
            return true;
        }
        false
    }

    /// Current position within the period (0-9).
    pub fn raw(&self) -> i32 {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollover_every_ten_ticks() {
        let mut clock = FrameClock::new();
        let mut rollovers = Vec::new();
        for tick in 1..=30 {
            if clock.advance() {
                rollovers.push(tick);
            }
        }
        assert_eq!(rollovers, vec![10, 20, 30]);
    }

    #[test]
    fn test_raw_stays_in_period() {
        let mut clock = FrameClock::new();
        for _ in 0..100 {
            clock.advance();
            assert!((0..IDLE_STEP_TICKS).contains(&clock.raw()));
        }
    }

    #[test]
    fn test_reset_rewinds_period() {
        let mut clock = FrameClock::new();
        for _ in 0..7 {
            clock.advance();
        }
        clock.reset();
        assert_eq!(clock.raw(), 0);
    }
}
