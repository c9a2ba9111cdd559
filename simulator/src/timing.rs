//! Frame timing for the simulator.
//!
//! Uses `std::time::Duration`, so it lives here rather than in the `no_std`
//! common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Time skipped by the fast-forward key.
pub const FAST_FORWARD: Duration = Duration::from_secs(60);

/// Milliseconds in `duration`, saturating at `u32::MAX`.
pub fn as_millis_u32(duration: Duration) -> u32 { u32::try_from(duration.as_millis()).unwrap_or(u32::MAX) }
