//! Animation events for decoupled communication with the host.
//!
//! The draw and tick callbacks emit events; the host consumes them from
//! the frame-tick return value. This lets audio and battle-log code react
//! to animation beats without reaching into animator state.

use glam::IVec2;

/// One-shot animation events emitted while a battle runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimEvent {
    /// A battler took damage and started its hurt flash
    HurtTriggered { slot: usize },
    /// A battler's HP crossed from positive to zero or below
    BattlerDied { slot: usize },
    /// A cast sequence reached its cue tick; the screen overlay starts
    /// at `anchor`. The host's sound effect belongs on this beat.
    CastOverlayCued { slot: usize, anchor: IVec2 },
    /// An attack choreography returned home and settled
    SequenceFinished { slot: usize },
}

/// Simple event queue - events are pushed during draws and ticks, handed
/// to the host at the end of the frame tick
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<AnimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: AnimEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = AnimEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard everything without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
