//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in
//! `no_std` environments, so they are defined here rather than in the common
//! crate. The cadences themselves come from `medclock_common::config`.

use std::time::Duration;

use medclock_common::config::FRAME_MS;

/// Period of the redraw driver loop (matches the firmware's 10 ms cadence).
pub const FRAME_TIME: Duration = Duration::from_millis(FRAME_MS);

/// Artificial delay before the fake "SNTP" anchor, so the pre-sync
/// placeholder rendering is visible in the simulator too.
pub const SYNC_DELAY: Duration = Duration::from_secs(3);

/// Headless mode renders this many frames (~5 seconds) before writing the
/// snapshot and exiting.
pub const HEADLESS_FRAMES: u32 = 500;
