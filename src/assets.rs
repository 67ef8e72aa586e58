//! Image capability boundary between the animator and its host.
//!
//! The animator never decodes or draws pixels. It asks the host to load
//! named files, keeps the opaque handles it gets back, and returns them
//! at draw time. Formats, color masking, and blitting are host concerns.

use std::path::{Path, PathBuf};

/// Opaque id for a host-side image.
///
/// Minted by [`ImageSource::load_masked`] and meaningful only to the
/// host that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// Host-side image loader and lifetime manager.
///
/// Load failures come back as `None`, never a panic: a missing pose file
/// means the battler draws nothing this tick, and the load is retried the
/// next time that pose is requested.
pub trait ImageSource {
    /// Load an image with its transparent-color mask applied.
    fn load_masked(&mut self, path: &Path) -> Option<ImageHandle>;

    /// Set the blend opacity used when `handle` is drawn (0-255).
    fn set_opacity(&mut self, handle: ImageHandle, opacity: u8);

    /// Drop the host-side image behind `handle`.
    fn release(&mut self, handle: ImageHandle);
}

/// Path of pose file `file_no` (1-based) for the monster named `name`.
///
/// Pose art lives in `Monster/<name>/<n>.png`: files 1-3 are the idle
/// cycle, 4 dead, 5-6 hurt, 7-8 approach and return, 9-11 the strikes.
pub fn monster_pose_path(name: &str, file_no: usize) -> PathBuf {
    PathBuf::from(format!("Monster/{}/{}.png", name, file_no))
}

/// Path of cast-overlay frame `frame_no` (1-based): `Picture/cast/<n>.png`.
pub fn cast_frame_path(frame_no: usize) -> PathBuf {
    PathBuf::from(format!("Picture/cast/{}.png", frame_no))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_pose_path_layout() {
        let path = monster_pose_path("Slime", 4);
        assert_eq!(path, PathBuf::from("Monster/Slime/4.png"));
    }

    #[test]
    fn test_cast_frame_path_layout() {
        let path = cast_frame_path(13);
        assert_eq!(path, PathBuf::from("Picture/cast/13.png"));
    }
}
