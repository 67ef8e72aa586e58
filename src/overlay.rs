//! Full-screen cast effect sequencer.
//!
//! One shared effect strip plays over the battle scene when a cast
//! sequence reaches its cue tick. It advances on draw opportunities, not
//! battle ticks, so its wall-clock speed scales with how many battlers
//! the host draws per frame. That matches how the effect has always
//! paced itself against the battle row.

use glam::IVec2;

use crate::assets::{cast_frame_path, ImageHandle, ImageSource};
use crate::constants::{CAST_DRAW_BIAS, CAST_FRAME_COUNT, CAST_FRAME_TICKS, CAST_OPACITY};

/// One overlay frame ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayFrame {
    pub image: ImageHandle,
    /// Top-left corner on screen.
    pub pos: IVec2,
}

/// The cast effect strip and its playback position.
///
/// Frame images are cached for the life of the animator; only playback
/// state rewinds between battles.
#[derive(Debug)]
pub struct CastOverlay {
    active: bool,
    elapsed: u32,
    anchor: IVec2,
    frames: [Option<ImageHandle>; CAST_FRAME_COUNT],
}

impl CastOverlay {
    pub fn new() -> Self {
        Self {
            active: false,
            elapsed: 0,
            anchor: IVec2::ZERO,
            frames: [None; CAST_FRAME_COUNT],
        }
    }

    /// Start playing at `anchor`. If a run is already playing, it keeps
    /// its place and only the anchor moves: the newest cast wins.
    pub fn activate(&mut self, anchor: IVec2) {
        self.anchor = anchor;
        self.active = true;
        log::debug!("cast overlay active at {:?}", anchor);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn anchor(&self) -> IVec2 {
        self.anchor
    }

    /// Advance one step and return the frame to draw, if any.
    ///
    /// A step whose frame image is missing loads every missing frame in
    /// one batch and draws nothing; the step still counts, so a cold
    /// start shows its first frame one step short.
    pub fn advance(&mut self, images: &mut impl ImageSource) -> Option<OverlayFrame> {
        if !self.active {
            return None;
        }
        if self.elapsed >= CAST_FRAME_COUNT as u32 * CAST_FRAME_TICKS {
            self.active = false;
            self.elapsed = 0;
            return None;
        }

        let frame = (self.elapsed / CAST_FRAME_TICKS) as usize;
        self.elapsed += 1;

        match self.frames[frame] {
            Some(image) => Some(OverlayFrame {
                image,
                pos: self.anchor + CAST_DRAW_BIAS,
            }),
            None => {
                self.load_missing_frames(images);
                None
            }
        }
    }

    /// Stop playing and rewind. Cached frame images stay cached.
    pub fn reset(&mut self) {
        self.active = false;
        self.elapsed = 0;
    }

    fn load_missing_frames(&mut self, images: &mut impl ImageSource) {
        for (i, entry) in self.frames.iter_mut().enumerate() {
            if entry.is_none() {
                if let Some(handle) = images.load_masked(&cast_frame_path(i + 1)) {
                    images.set_opacity(handle, CAST_OPACITY);
                    *entry = Some(handle);
                }
            }
        }
    }
}

impl Default for CastOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    struct StubImages {
        next_id: u64,
        fail: bool,
        loads: Vec<PathBuf>,
        opacities: Vec<(ImageHandle, u8)>,
    }

    impl StubImages {
        fn new() -> Self {
            Self {
                next_id: 1,
                fail: false,
                loads: Vec::new(),
                opacities: Vec::new(),
            }
        }
    }

    impl ImageSource for StubImages {
        fn load_masked(&mut self, path: &Path) -> Option<ImageHandle> {
            if self.fail {
                return None;
            }
            self.loads.push(path.to_path_buf());
            let handle = ImageHandle(self.next_id);
            self.next_id += 1;
            Some(handle)
        }

        fn set_opacity(&mut self, handle: ImageHandle, opacity: u8) {
            self.opacities.push((handle, opacity));
        }

        fn release(&mut self, _handle: ImageHandle) {}
    }

    #[test]
    fn test_cold_start_loads_batch_without_drawing() {
        let mut overlay = CastOverlay::new();
        let mut images = StubImages::new();
        overlay.activate(IVec2::new(200, 120));

        assert_eq!(overlay.advance(&mut images), None);
        assert_eq!(images.loads.len(), CAST_FRAME_COUNT);
        assert_eq!(images.loads[0], PathBuf::from("Picture/cast/1.png"));
        assert_eq!(images.loads[12], PathBuf::from("Picture/cast/13.png"));
        assert!(images.opacities.iter().all(|&(_, o)| o == CAST_OPACITY));

        // With the strip cached, the next step draws frame 1 offset from
        // the anchor.
        let frame = overlay.advance(&mut images).unwrap();
        assert_eq!(frame.pos, IVec2::new(200, 120) + CAST_DRAW_BIAS);
    }

    #[test]
    fn test_run_ends_after_full_strip() {
        let mut overlay = CastOverlay::new();
        let mut images = StubImages::new();
        overlay.activate(IVec2::ZERO);

        let mut steps = 0;
        while overlay.is_active() {
            overlay.advance(&mut images);
            steps += 1;
            assert!(steps <= 200, "overlay never finished");
        }
        // 91 playing steps plus the step that notices the end.
        assert_eq!(steps, 92);
    }

    #[test]
    fn test_warm_frames_hold_seven_steps() {
        let mut overlay = CastOverlay::new();
        let mut images = StubImages::new();

        // First run caches the strip.
        overlay.activate(IVec2::ZERO);
        while overlay.is_active() {
            overlay.advance(&mut images);
        }
        let loads_after_first_run = images.loads.len();

        overlay.activate(IVec2::ZERO);
        let first = overlay.advance(&mut images).unwrap().image;
        for _ in 0..6 {
            assert_eq!(overlay.advance(&mut images).unwrap().image, first);
        }
        let second = overlay.advance(&mut images).unwrap().image;
        assert_ne!(second, first);
        // Nothing reloaded on the warm run.
        assert_eq!(images.loads.len(), loads_after_first_run);
    }

    #[test]
    fn test_retrigger_moves_anchor_and_keeps_place() {
        let mut overlay = CastOverlay::new();
        let mut images = StubImages::new();
        overlay.activate(IVec2::new(100, 100));
        for _ in 0..10 {
            overlay.advance(&mut images);
        }

        overlay.activate(IVec2::new(300, 50));
        let frame = overlay.advance(&mut images).unwrap();
        assert_eq!(frame.pos, IVec2::new(300, 50) + CAST_DRAW_BIAS);
        // Ten steps in (first one spent loading), still inside frame 2's
        // seven-step hold rather than restarted at frame 1.
        assert_eq!(frame.image, ImageHandle(2));
    }

    #[test]
    fn test_reset_keeps_cached_frames() {
        let mut overlay = CastOverlay::new();
        let mut images = StubImages::new();
        overlay.activate(IVec2::ZERO);
        overlay.advance(&mut images);
        overlay.reset();
        assert!(!overlay.is_active());

        overlay.activate(IVec2::ZERO);
        assert!(overlay.advance(&mut images).is_some());
        assert_eq!(images.loads.len(), CAST_FRAME_COUNT);
    }

    #[test]
    fn test_failed_strip_load_retries_later() {
        let mut overlay = CastOverlay::new();
        let mut images = StubImages::new();
        images.fail = true;
        overlay.activate(IVec2::ZERO);
        assert_eq!(overlay.advance(&mut images), None);
        assert_eq!(overlay.advance(&mut images), None);

        images.fail = false;
        assert_eq!(overlay.advance(&mut images), None);
        assert!(overlay.advance(&mut images).is_some());
    }
}
