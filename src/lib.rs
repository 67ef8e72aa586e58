//! Frame-driven battler sprite animation for a fixed-rate battle scene.
//!
//! The host calls in five places: once per battler before and after it
//! draws, once per frame with the active scene, when a battler's action
//! starts, and when a battle opens. From those calls the animator keeps
//! every battler's pose and screen position coherent: idle cycling, hurt
//! flashes, death, and the melee and cast attack choreographies, all
//! timed in integer ticks against a 60 ticks-per-second reference rate.
//!
//! Image loading stays on the host's side of the [`assets::ImageSource`]
//! trait; the animator computes file paths, caches the opaque handles it
//! gets back, and hands them out at draw time.

pub mod action;
pub mod animator;
pub mod assets;
pub mod battler;
pub mod catalog;
pub mod choreography;
pub mod clock;
pub mod constants;
pub mod events;
pub mod overlay;
pub mod reaction;

// Re-exports for convenience
pub use action::{ActionTarget, BattleAction, SkillFlags};
pub use animator::{BattleAnimator, Scene, SpriteFrame};
pub use assets::{ImageHandle, ImageSource};
pub use battler::{Approach, BattlerSlot, SlotOutOfRange};
pub use events::AnimEvent;
pub use overlay::{CastOverlay, OverlayFrame};
