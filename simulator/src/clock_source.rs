//! Host time source: seeds the shared wall-clock model from the system clock.
//!
//! On the device the wall clock is anchored by the SNTP task; here the host's
//! own (NTP-disciplined) system clock plays that role. Everything downstream
//! of the anchor is the same `WallClock` code the firmware runs.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use medclock_common::config::UTC_OFFSET_SECS;
use medclock_common::{WallClock, WallTime};

pub struct HostClock {
    clock: WallClock,
    started: Instant,
}

impl HostClock {
    /// Create an unsynchronized clock, mirroring the device's boot state.
    pub fn new() -> Self {
        Self {
            clock: WallClock::new(UTC_OFFSET_SECS),
            started: Instant::now(),
        }
    }

    fn monotonic_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Anchor from the host clock, standing in for an SNTP exchange.
    pub fn sync_from_system(&mut self) {
        if let Ok(since_epoch) = SystemTime::now().duration_since(UNIX_EPOCH) {
            let monotonic = self.monotonic_ms();
            self.clock.sync(since_epoch.as_secs(), monotonic);
        }
    }

    pub fn is_synchronized(&self) -> bool {
        self.clock.is_synchronized()
    }

    /// Sample the local wall-clock time; `None` before the first sync.
    pub fn now(&self) -> Option<WallTime> {
        self.clock.now(self.monotonic_ms())
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unsynchronized() {
        let clock = HostClock::new();
        assert!(!clock.is_synchronized());
        assert!(clock.now().is_none());
    }

    #[test]
    fn test_sync_produces_valid_time() {
        let mut clock = HostClock::new();
        clock.sync_from_system();
        assert!(clock.is_synchronized());

        let t = clock.now().expect("synchronized clock must produce a time");
        assert!(t.hour <= 23);
        assert!(t.minute <= 59);
        assert!(t.second <= 59);
    }
}
