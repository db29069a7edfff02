//! Embassy tasks: network bring-up, SNTP synchronization, and the
//! clock-formatting loop.

pub mod clock;
pub mod net;
pub mod sync;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use medclock_common::WallClock;
use medclock_common::config::UTC_OFFSET_SECS;

/// Process-wide wall clock. Written by the SNTP task on each successful
/// exchange, read by the clock task once per second.
pub static WALL_CLOCK: Mutex<CriticalSectionRawMutex, WallClock> = Mutex::new(WallClock::new(UTC_OFFSET_SECS));
