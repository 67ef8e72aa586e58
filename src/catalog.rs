//! Lazy per-battler pose image cache.
//!
//! Pose files load on first use, one handle per distinct file, and stay
//! cached until the battle ends. A failed load stays empty and is retried
//! the next time that pose comes up, so a battler whose art is missing
//! just draws nothing until the file appears.

use crate::assets::{monster_pose_path, ImageHandle, ImageSource};
use crate::constants::{ANIMATION_CYCLE, NUM_POSES};

/// Cached pose images for every battler slot, keyed by 1-based file number.
///
/// Cycle positions 1 and 3 both render file `2.png`; keying rows by file
/// number rather than cycle position keeps that file loaded exactly once.
/// Index 0 of each row stays empty.
#[derive(Debug)]
pub struct PoseCatalog {
    handles: Vec<[Option<ImageHandle>; NUM_POSES]>,
}

impl PoseCatalog {
    /// Empty catalog with one row per battler slot.
    pub fn new(slots: usize) -> Self {
        Self {
            handles: vec![[None; NUM_POSES]; slots],
        }
    }

    /// Image for `slot` at cycle position `pose_index`, loading through
    /// `images` on first use. `None` means the load failed and will be
    /// retried on the next call. `slot` must be within the capacity the
    /// catalog was built with.
    pub fn get(
        &mut self,
        slot: usize,
        pose_index: usize,
        name: &str,
        images: &mut impl ImageSource,
    ) -> Option<ImageHandle> {
        let file_no = ANIMATION_CYCLE[pose_index.min(NUM_POSES - 1)];
        let entry = &mut self.handles[slot][file_no];
        if entry.is_none() {
            *entry = images.load_masked(&monster_pose_path(name, file_no));
            if entry.is_none() {
                log::debug!("pose image missing: {} file {}", name, file_no);
            }
        }
        *entry
    }

    /// Release every cached handle back to the host. Entries are cleared
    /// as they go, so calling this twice frees nothing twice.
    pub fn release_all(&mut self, images: &mut impl ImageSource) {
        for row in &mut self.handles {
            for entry in row.iter_mut() {
                if let Some(handle) = entry.take() {
                    images.release(handle);
                }
            }
        }
    }
}
