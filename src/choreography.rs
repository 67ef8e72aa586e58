//! Melee and cast approach timelines.
//!
//! A running approach advances one move frame per battle tick. Both
//! timelines share a shape: walk out, hold at the destination while the
//! strike poses fire on fixed ticks, walk back, snap home within a small
//! tolerance. Melee adds a jump arc on the return leg; cast swaps the
//! strikes' lead-in for the screen overlay cue.

use glam::IVec2;

use crate::battler::{Approach, BattlerSlot};
use crate::constants::{
    ARRIVE_TOLERANCE_PX, CAST_ADVANCE_TICKS, CAST_CUE_TICK, CAST_RETURN_AFTER, CAST_RETURN_TICKS,
    CAST_SETTLE_AFTER, CAST_STRIKES, JUMP_ARC, MELEE_ADVANCE_TICKS, MELEE_JUMP_RESET_TICK,
    MELEE_RETURN_AFTER, MELEE_RETURN_TICKS, MELEE_SETTLE_TICK, MELEE_STRIKES, POSE_ADVANCE,
    POSE_IDLE_SETTLE, POSE_RETREAT,
};
use crate::events::{AnimEvent, EventQueue};

/// Integer lerp from `from` toward `to`, `step` ticks into a `window`.
/// `step == window` lands exactly on `to`.
fn lerp_toward(from: IVec2, to: IVec2, step: i32, window: i32) -> IVec2 {
    from + (to - from) * step / window
}

/// Manhattan distance between two screen positions.
fn manhattan(a: IVec2, b: IVec2) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Advance one battler's running choreography by one move frame.
/// Does nothing for a battler at rest.
pub fn advance(slot_id: usize, slot: &mut BattlerSlot, events: &mut EventQueue) {
    match slot.approach {
        Approach::None => {}
        Approach::Melee {
            move_frame,
            jump_tick,
        } => advance_melee(slot_id, slot, move_frame, jump_tick, events),
        Approach::Cast { move_frame } => advance_cast(slot_id, slot, move_frame, events),
    }
}

fn advance_melee(
    slot_id: usize,
    slot: &mut BattlerSlot,
    mf: i32,
    mut jump_tick: usize,
    events: &mut EventQueue,
) {
    // Outbound walk. The +1 lands the final step exactly on dest.
    if mf < MELEE_ADVANCE_TICKS {
        slot.pose_index = POSE_ADVANCE;
        slot.current = lerp_toward(slot.source, slot.dest, mf + 1, MELEE_ADVANCE_TICKS);
    }

    for &(tick, pose) in MELEE_STRIKES.iter() {
        if mf == tick {
            slot.pose_index = pose;
        }
    }
    if mf == MELEE_JUMP_RESET_TICK {
        jump_tick = 0;
    }

    // Distance from home, measured before any return movement this tick.
    let dist = manhattan(slot.source, slot.current);

    if mf > MELEE_RETURN_AFTER && dist > ARRIVE_TOLERANCE_PX {
        slot.pose_index = POSE_RETREAT;
        slot.current = lerp_toward(
            slot.dest,
            slot.source,
            mf - MELEE_RETURN_AFTER,
            MELEE_RETURN_TICKS,
        );
        if jump_tick < JUMP_ARC.len() {
            slot.current.y += JUMP_ARC[jump_tick];
            jump_tick += 1;
        }
    }

    if mf >= MELEE_SETTLE_TICK && dist <= ARRIVE_TOLERANCE_PX {
        settle(slot_id, slot, events);
        return;
    }

    slot.approach = Approach::Melee {
        move_frame: mf + 1,
        jump_tick,
    };
}

fn advance_cast(slot_id: usize, slot: &mut BattlerSlot, mf: i32, events: &mut EventQueue) {
    // Short forward step.
    if mf < CAST_ADVANCE_TICKS {
        slot.pose_index = POSE_ADVANCE;
        slot.current = lerp_toward(slot.source, slot.dest, mf + 1, CAST_ADVANCE_TICKS);
    }

    // The overlay anchors where the battler stands right now.
    if mf == CAST_CUE_TICK {
        events.push(AnimEvent::CastOverlayCued {
            slot: slot_id,
            anchor: slot.current,
        });
    }

    for &(tick, pose) in CAST_STRIKES.iter() {
        if mf == tick {
            slot.pose_index = pose;
        }
    }

    let dist = manhattan(slot.source, slot.current);

    if mf > CAST_RETURN_AFTER && dist > ARRIVE_TOLERANCE_PX {
        slot.pose_index = POSE_RETREAT;
        slot.current = lerp_toward(
            slot.dest,
            slot.source,
            mf - CAST_RETURN_AFTER,
            CAST_RETURN_TICKS,
        );
    }

    if mf > CAST_SETTLE_AFTER && dist <= ARRIVE_TOLERANCE_PX {
        settle(slot_id, slot, events);
        return;
    }

    slot.approach = Approach::Cast {
        move_frame: mf + 1,
    };
}

/// Snap home and end the sequence.
fn settle(slot_id: usize, slot: &mut BattlerSlot, events: &mut EventQueue) {
    slot.pose_index = POSE_IDLE_SETTLE;
    slot.current = slot.source;
    slot.approach = Approach::None;
    events.push(AnimEvent::SequenceFinished { slot: slot_id });
}
