//! Fixed tables and tick thresholds organized by domain.
//!
//! Everything in here is deliberately compiled in: pose tables, strike
//! ticks, and the cast-flag list are part of the build, not external data.
//! Constants are split into submodules by domain for easier navigation.

mod battle;
mod overlay;
mod poses;
mod timing;

// Re-export all constants at the module level so callers can glob-import
pub use battle::*;
pub use overlay::*;
pub use poses::*;
pub use timing::*;
