//! Battle action descriptors and the skill cast-flag table.
//!
//! The animator only sees the slice of an action that movement cares
//! about: which skill id it uses and whether it is aimed at a party
//! member. Damage, turn order, and targeting rules stay in the host.

use glam::IVec2;

use crate::constants::SKILL_FLAG_COUNT;

/// What an action is aimed at, as far as movement is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    /// A single party member at the given screen position.
    PartyMember(IVec2),
    /// Anything else: a monster, the whole party, the battler itself.
    Other,
}

/// The movement-relevant slice of a battle action.
#[derive(Debug, Clone, Copy)]
pub struct BattleAction {
    /// Skill id from the host's database; 0 works fine for plain attacks.
    pub skill: u16,
    /// Where the action is aimed.
    pub target: ActionTarget,
}

/// Which skill ids play the cast choreography instead of a melee run.
///
/// Fixed-size table indexed by skill id. Ids beyond the table read as
/// unflagged, so an oversized id falls back to the melee run instead of
/// breaking the lookup.
#[derive(Debug, Clone)]
pub struct SkillFlags {
    flags: [bool; SKILL_FLAG_COUNT],
}

impl SkillFlags {
    /// Empty table: every skill melees.
    pub fn new() -> Self {
        Self {
            flags: [false; SKILL_FLAG_COUNT],
        }
    }

    /// Table with the given skill ids flagged as casts. Ids beyond the
    /// table are ignored.
    pub fn from_ids(ids: &[u16]) -> Self {
        let mut table = Self::new();
        for &id in ids {
            if (id as usize) < SKILL_FLAG_COUNT {
                table.flags[id as usize] = true;
            }
        }
        table
    }

    /// Whether `skill` plays the cast choreography.
    pub fn is_cast(&self, skill: u16) -> bool {
        self.flags.get(skill as usize).copied().unwrap_or(false)
    }
}

impl Default for SkillFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CAST_SKILLS;

    #[test]
    fn test_compiled_in_cast_skills_are_flagged() {
        let flags = SkillFlags::from_ids(CAST_SKILLS);
        for &id in CAST_SKILLS {
            assert!(flags.is_cast(id));
        }
        assert!(!flags.is_cast(1));
        assert!(!flags.is_cast(99));
    }

    #[test]
    fn test_oversized_skill_ids_read_unflagged() {
        let flags = SkillFlags::from_ids(&[1500]);
        assert!(!flags.is_cast(1500));
        assert!(!flags.is_cast(999));
    }

    #[test]
    fn test_empty_table_melees_everything() {
        let flags = SkillFlags::new();
        assert!(!flags.is_cast(0));
        assert!(!flags.is_cast(96));
    }
}
