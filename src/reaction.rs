//! Damage reactions and displayed-pose resolution.
//!
//! The animator never hears about damage directly; it compares the HP the
//! host reports at draw time against the last value it saw. Resolution
//! then picks the one pose this draw shows, with a fixed priority: dead
//! beats hurt beats whatever the timeline or idle cycle put in the slot.

use crate::battler::{Approach, BattlerSlot};
use crate::constants::{HURT_DURATION_TICKS, HURT_FLIP_TICKS, POSE_DEAD, POSE_HURT_FIRST};
use crate::events::{AnimEvent, EventQueue};

/// Which state owns the pose shown this draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseGovernor {
    Idle,
    Hurt,
    Dead,
    MeleeApproach,
    CastApproach,
}

/// The pose decision for one draw
#[derive(Debug, Clone, Copy)]
pub struct PoseChoice {
    pub governor: PoseGovernor,
    /// Position in the 12-entry pose cycle to render.
    pub pose_index: usize,
}

/// Compare host-reported HP against the last value seen and update the
/// slot's reaction state. Damage arms the hurt flash (even when lethal;
/// the dead pose outranks it at resolution); heals are recorded silently
/// so the next hit is measured from the healed value.
pub fn observe_hp(slot_id: usize, slot: &mut BattlerSlot, hp: i32, events: &mut EventQueue) {
    if hp < slot.last_hp {
        slot.hurt_timer = HURT_DURATION_TICKS;
        events.push(AnimEvent::HurtTriggered { slot: slot_id });
        if hp <= 0 && slot.last_hp > 0 {
            events.push(AnimEvent::BattlerDied { slot: slot_id });
        }
        slot.last_hp = hp;
    } else if hp > slot.last_hp {
        slot.last_hp = hp;
    }
}

/// Resolve the one pose this draw shows and settle reaction timers.
///
/// An armed hurt countdown drains here, one step per draw, even while the
/// battler is dead, so a later revive doesn't flash a stale hurt pose.
/// Death also cancels any running approach on the spot; the position
/// freezes wherever the choreography left it.
pub fn resolve_pose(slot: &mut BattlerSlot, hp: i32, clock_value: i32) -> PoseChoice {
    let hurt_active = slot.hurt_timer > 0;
    if hurt_active {
        slot.hurt_timer -= 1;
    }

    if hp <= 0 {
        slot.approach = Approach::None;
        return PoseChoice {
            governor: PoseGovernor::Dead,
            pose_index: POSE_DEAD,
        };
    }

    if hurt_active {
        let flip = (clock_value / HURT_FLIP_TICKS).min(1) as usize;
        return PoseChoice {
            governor: PoseGovernor::Hurt,
            pose_index: POSE_HURT_FIRST + flip,
        };
    }

    let governor = match slot.approach {
        Approach::Melee { .. } => PoseGovernor::MeleeApproach,
        Approach::Cast { .. } => PoseGovernor::CastApproach,
        Approach::None => PoseGovernor::Idle,
    };
    PoseChoice {
        governor,
        pose_index: slot.pose_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::POSE_ADVANCE;

    fn sighted_slot(hp: i32) -> BattlerSlot {
        let mut slot = BattlerSlot::new(0);
        slot.last_hp = hp;
        slot
    }

    #[test]
    fn test_damage_arms_hurt_flash() {
        let mut slot = sighted_slot(50);
        let mut events = EventQueue::new();
        observe_hp(3, &mut slot, 40, &mut events);
        assert_eq!(slot.hurt_timer, HURT_DURATION_TICKS);
        assert_eq!(slot.last_hp, 40);
        let drained: Vec<AnimEvent> = events.drain().collect();
        assert_eq!(drained, vec![AnimEvent::HurtTriggered { slot: 3 }]);
    }

    #[test]
    fn test_heal_records_without_flash() {
        let mut slot = sighted_slot(40);
        let mut events = EventQueue::new();
        observe_hp(0, &mut slot, 55, &mut events);
        assert_eq!(slot.hurt_timer, 0);
        assert_eq!(slot.last_hp, 55);
        assert!(events.is_empty());
    }

    #[test]
    fn test_lethal_damage_emits_death() {
        let mut slot = sighted_slot(10);
        let mut events = EventQueue::new();
        observe_hp(1, &mut slot, 0, &mut events);
        let drained: Vec<AnimEvent> = events.drain().collect();
        assert_eq!(
            drained,
            vec![
                AnimEvent::HurtTriggered { slot: 1 },
                AnimEvent::BattlerDied { slot: 1 },
            ]
        );
    }

    #[test]
    fn test_death_fires_once_per_crossing() {
        let mut slot = sighted_slot(5);
        let mut events = EventQueue::new();
        observe_hp(0, &mut slot, -2, &mut events);
        events.clear();
        // Further damage below zero still flashes but is not a new death.
        observe_hp(0, &mut slot, -8, &mut events);
        let drained: Vec<AnimEvent> = events.drain().collect();
        assert_eq!(drained, vec![AnimEvent::HurtTriggered { slot: 0 }]);
    }

    #[test]
    fn test_hurt_flash_lasts_thirty_draws() {
        let mut slot = sighted_slot(50);
        let mut events = EventQueue::new();
        observe_hp(0, &mut slot, 40, &mut events);
        for _ in 0..HURT_DURATION_TICKS {
            let choice = resolve_pose(&mut slot, 40, 0);
            assert_eq!(choice.governor, PoseGovernor::Hurt);
        }
        let choice = resolve_pose(&mut slot, 40, 0);
        assert_eq!(choice.governor, PoseGovernor::Idle);
        assert_eq!(slot.hurt_timer, 0);
    }

    #[test]
    fn test_hurt_pose_flips_on_clock_halves() {
        let mut slot = sighted_slot(50);
        let mut events = EventQueue::new();
        observe_hp(0, &mut slot, 40, &mut events);
        for clock in 0..5 {
            let choice = resolve_pose(&mut slot, 40, clock);
            assert_eq!(choice.pose_index, POSE_HURT_FIRST);
        }
        for clock in 5..10 {
            let choice = resolve_pose(&mut slot, 40, clock);
            assert_eq!(choice.pose_index, POSE_HURT_FIRST + 1);
        }
    }

    #[test]
    fn test_dead_outranks_hurt_and_cancels_approach() {
        let mut slot = sighted_slot(10);
        slot.approach = Approach::Melee {
            move_frame: 12,
            jump_tick: 0,
        };
        slot.pose_index = POSE_ADVANCE;
        let mut events = EventQueue::new();
        observe_hp(0, &mut slot, 0, &mut events);
        let choice = resolve_pose(&mut slot, 0, 0);
        assert_eq!(choice.governor, PoseGovernor::Dead);
        assert_eq!(choice.pose_index, POSE_DEAD);
        assert_eq!(slot.approach, Approach::None);
    }

    #[test]
    fn test_revive_shows_no_stale_flash() {
        let mut slot = sighted_slot(10);
        let mut events = EventQueue::new();
        observe_hp(0, &mut slot, 0, &mut events);
        // The countdown drains while dead.
        for _ in 0..HURT_DURATION_TICKS {
            resolve_pose(&mut slot, 0, 0);
        }
        observe_hp(0, &mut slot, 10, &mut events);
        let choice = resolve_pose(&mut slot, 10, 0);
        assert_eq!(choice.governor, PoseGovernor::Idle);
    }

    #[test]
    fn test_approach_governs_when_unhurt() {
        let mut slot = sighted_slot(50);
        slot.approach = Approach::Cast { move_frame: 3 };
        slot.pose_index = POSE_ADVANCE;
        let choice = resolve_pose(&mut slot, 50, 0);
        assert_eq!(choice.governor, PoseGovernor::CastApproach);
        assert_eq!(choice.pose_index, POSE_ADVANCE);
    }
}
