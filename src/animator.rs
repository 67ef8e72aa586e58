//! Root animator context and the host-facing callbacks.
//!
//! The host drives everything through five calls, in this per-frame
//! order: `draw_battler` for each battler, `battler_drawn` for each
//! battler, then one `frame_tick` with the current scene. `action_start`
//! arrives whenever the host's battle system starts a battler's action,
//! and `battle_start` when a battle opens.
//!
//! All state is plain data owned here; the only outside collaborator is
//! the host's image loader behind [`ImageSource`].

use glam::IVec2;

use crate::action::{ActionTarget, BattleAction, SkillFlags};
use crate::assets::{ImageHandle, ImageSource};
use crate::battler::{Approach, BattlerSlot, SlotOutOfRange};
use crate::catalog::PoseCatalog;
use crate::choreography;
use crate::clock::FrameClock;
use crate::constants::{CAST_SKILLS, CAST_STEP_PX, MAX_BATTLERS, MELEE_TARGET_GAP_PX};
use crate::events::{AnimEvent, EventQueue};
use crate::overlay::{CastOverlay, OverlayFrame};
use crate::reaction::{observe_hp, resolve_pose};

/// Which scene the host is running this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Battle,
    Map,
    Menu,
    Title,
    GameOver,
}

/// What to draw for one battler this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    /// Pose image, once it has loaded; `None` draws nothing this tick.
    pub image: Option<ImageHandle>,
    /// Where to draw it. Authoritative over the host's own position.
    pub pos: IVec2,
}

/// Per-frame battler animation state machine.
///
/// Owns one slot per battler position, the shared frame clock, the pose
/// image catalog, and the cast overlay. Battles reset it wholesale; see
/// [`BattleAnimator::battle_start`].
pub struct BattleAnimator {
    slots: Vec<BattlerSlot>,
    catalog: PoseCatalog,
    clock: FrameClock,
    overlay: CastOverlay,
    skill_flags: SkillFlags,
    events: EventQueue,
    /// Armed while battle frames run; the first non-battle frame after
    /// that performs the end-of-battle reset.
    battle_seen: bool,
}

impl BattleAnimator {
    /// Animator with the standard battler capacity.
    pub fn new() -> Self {
        Self::with_slots(MAX_BATTLERS)
    }

    /// Animator with a custom battler capacity.
    pub fn with_slots(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(BattlerSlot::new).collect(),
            catalog: PoseCatalog::new(capacity),
            clock: FrameClock::new(),
            overlay: CastOverlay::new(),
            skill_flags: SkillFlags::from_ids(CAST_SKILLS),
            events: EventQueue::new(),
            battle_seen: false,
        }
    }

    /// Called as the host draws one battler.
    ///
    /// Non-monsters pass through untouched. For monsters this captures
    /// the resting position on first sighting, reacts to HP changes,
    /// resolves the pose to show, and returns the image and position to
    /// draw. A `None` image means the pose file hasn't loaded yet; the
    /// host should draw nothing and will get the image once a load
    /// succeeds.
    pub fn draw_battler(
        &mut self,
        slot: usize,
        is_monster: bool,
        name: &str,
        hp: i32,
        at: IVec2,
        images: &mut impl ImageSource,
    ) -> Result<Option<SpriteFrame>, SlotOutOfRange> {
        self.check_slot(slot)?;
        if !is_monster {
            return Ok(None);
        }

        let battler = &mut self.slots[slot];
        battler.capture_source(at);
        observe_hp(slot, battler, hp, &mut self.events);
        let choice = resolve_pose(battler, hp, self.clock.raw());
        let pos = battler.current;
        let image = self.catalog.get(slot, choice.pose_index, name, images);
        Ok(Some(SpriteFrame { image, pos }))
    }

    /// Called after the host has drawn one battler. Steps the cast
    /// overlay and returns its frame when one should be drawn on top.
    ///
    /// The overlay paces itself on these calls rather than battle ticks,
    /// so it plays faster with a fuller battle row. That is the pacing
    /// the effect strip was authored against.
    pub fn battler_drawn(
        &mut self,
        slot: usize,
        _is_monster: bool,
        images: &mut impl ImageSource,
    ) -> Result<Option<OverlayFrame>, SlotOutOfRange> {
        self.check_slot(slot)?;
        Ok(self.overlay.advance(images))
    }

    /// Called when a battler's action starts. Seeds the approach
    /// choreography: actions aimed at a party member with an unflagged
    /// skill walk to the target for melee; everything else takes the
    /// short cast step forward.
    pub fn action_start(
        &mut self,
        slot: usize,
        action: BattleAction,
    ) -> Result<(), SlotOutOfRange> {
        self.check_slot(slot)?;
        let battler = &mut self.slots[slot];
        match action.target {
            ActionTarget::PartyMember(target) if !self.skill_flags.is_cast(action.skill) => {
                battler.dest = target - IVec2::new(MELEE_TARGET_GAP_PX, 0);
                battler.approach = Approach::Melee {
                    move_frame: 0,
                    jump_tick: 0,
                };
            }
            _ => {
                battler.dest = battler.current + IVec2::new(CAST_STEP_PX, 0);
                battler.approach = Approach::Cast { move_frame: 0 };
            }
        }
        log::debug!(
            "slot {} action: skill {} -> {:?}",
            slot,
            action.skill,
            battler.approach
        );
        Ok(())
    }

    /// Called once per frame with the scene the host is running.
    ///
    /// Battle frames advance the clock (stepping idle poses on rollover)
    /// and every running choreography. The first non-battle frame after a
    /// battle performs the end-of-battle reset. Returns the events this
    /// tick produced, already applied internally; the host reads them for
    /// sound cues and battle-log hooks.
    pub fn frame_tick(&mut self, scene: Scene, images: &mut impl ImageSource) -> Vec<AnimEvent> {
        if scene == Scene::Battle {
            if self.clock.advance() {
                for battler in &mut self.slots {
                    battler.step_idle_pose();
                }
            }
            for (id, battler) in self.slots.iter_mut().enumerate() {
                choreography::advance(id, battler, &mut self.events);
            }
            self.battle_seen = true;
        } else if self.battle_seen {
            // Events still queued when the battle ends describe a battle
            // that no longer exists; they go with the rest of the state.
            self.battle_start(images);
            self.battle_seen = false;
        }

        let produced: Vec<AnimEvent> = self.events.drain().collect();
        for event in &produced {
            if let AnimEvent::CastOverlayCued { anchor, .. } = event {
                self.overlay.activate(*anchor);
            }
        }
        produced
    }

    /// Reset for a fresh battle: slot state back to defaults with the
    /// idle poses staggered by slot, pose images released, clock and
    /// overlay playback rewound. The overlay's cached frame images
    /// survive; only pose art is battle-scoped.
    pub fn battle_start(&mut self, images: &mut impl ImageSource) {
        for (id, battler) in self.slots.iter_mut().enumerate() {
            battler.reset(id);
        }
        self.catalog.release_all(images);
        self.overlay.reset();
        self.clock.reset();
        self.events.clear();
        log::debug!("battle animation state reset");
    }

    /// Slot state for `slot`, if it is within capacity.
    pub fn slot(&self, slot: usize) -> Option<&BattlerSlot> {
        self.slots.get(slot)
    }

    /// All slot state, indexed by battler position.
    pub fn slots(&self) -> &[BattlerSlot] {
        &self.slots
    }

    /// The shared cast overlay.
    pub fn overlay(&self) -> &CastOverlay {
        &self.overlay
    }

    fn check_slot(&self, slot: usize) -> Result<(), SlotOutOfRange> {
        let capacity = self.slots.len();
        if slot >= capacity {
            log::warn!("battler slot {} out of range (capacity {})", slot, capacity);
            return Err(SlotOutOfRange { slot, capacity });
        }
        Ok(())
    }
}

impl Default for BattleAnimator {
    fn default() -> Self {
        Self::new()
    }
}
