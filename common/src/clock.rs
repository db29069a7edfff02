//! Wall-clock model with explicit synchronization state.
//!
//! The firmware has no battery-backed RTC; wall-clock time only exists after
//! the first successful SNTP exchange. [`WallClock`] makes that explicit:
//! it starts [`SyncState::Unsynchronized`] and refuses to produce a
//! [`WallTime`] until [`WallClock::sync`] anchors it, so the UI renders a
//! placeholder instead of a bogus epoch time.
//!
//! Time is kept as an anchor pair `(unix seconds, monotonic milliseconds)`.
//! Reading the clock adds elapsed monotonic time to the anchor, which keeps
//! the model free of any platform time source: the device passes the Embassy
//! `Instant` tick count, the simulator passes `std::time::Instant` deltas,
//! and tests pass plain numbers.

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Calendar broken-down local time (no date component).
///
/// Invariants: `hour <= 23`, `minute <= 59`, `second <= 59`. Values are only
/// constructed through [`WallTime::from_seconds_of_day`], which reduces its
/// input modulo one day, so the invariants hold for every instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallTime {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a broken-down time from seconds since local midnight.
    ///
    /// Inputs of a day or more wrap around, so callers can pass a running
    /// local-seconds count directly.
    pub const fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
        }
    }
}

/// Time-source readiness.
///
/// `Unsynchronized` until the first SNTP result lands; the clock screen shows
/// a placeholder in that state rather than formatting garbage.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SyncState {
    /// No SNTP result received yet; wall-clock time is unknown.
    #[default]
    Unsynchronized,
    /// Anchored to at least one SNTP result.
    Synchronized,
}

/// Process-wide wall clock, anchored by SNTP and advanced by monotonic time.
///
/// Single writer (the sync task), any number of readers. Re-syncing simply
/// replaces the anchor, which absorbs monotonic drift accumulated since the
/// previous exchange.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    state: SyncState,
    /// Unix seconds at the moment of the last sync.
    anchor_unix_secs: u64,
    /// Monotonic milliseconds at the moment of the last sync.
    anchor_monotonic_ms: u64,
    /// Fixed offset from UTC to local time, in seconds.
    utc_offset_secs: i32,
}

impl WallClock {
    /// Create an unsynchronized clock with a fixed UTC offset.
    pub const fn new(utc_offset_secs: i32) -> Self {
        Self {
            state: SyncState::Unsynchronized,
            anchor_unix_secs: 0,
            anchor_monotonic_ms: 0,
            utc_offset_secs,
        }
    }

    /// Current readiness state.
    pub const fn state(&self) -> SyncState {
        self.state
    }

    pub const fn is_synchronized(&self) -> bool {
        matches!(self.state, SyncState::Synchronized)
    }

    /// Anchor the clock to an SNTP result.
    ///
    /// `unix_secs` is the server's time (UTC), `monotonic_now_ms` the local
    /// monotonic reading taken alongside it.
    pub fn sync(&mut self, unix_secs: u64, monotonic_now_ms: u64) {
        self.anchor_unix_secs = unix_secs;
        self.anchor_monotonic_ms = monotonic_now_ms;
        self.state = SyncState::Synchronized;
    }

    /// Sample the local wall-clock time.
    ///
    /// Returns `None` while unsynchronized. `monotonic_now_ms` must come from
    /// the same monotonic source that was passed to [`WallClock::sync`].
    pub fn now(&self, monotonic_now_ms: u64) -> Option<WallTime> {
        if !self.is_synchronized() {
            return None;
        }

        let elapsed_secs = monotonic_now_ms.saturating_sub(self.anchor_monotonic_ms) / 1000;
        let unix_secs = self.anchor_unix_secs + elapsed_secs;

        // Apply the UTC offset in signed arithmetic so negative offsets near
        // midnight wrap to the previous day instead of underflowing.
        let local_secs = unix_secs as i64 + self.utc_offset_secs as i64;
        let seconds_of_day = local_secs.rem_euclid(i64::from(SECONDS_PER_DAY)) as u32;

        Some(WallTime::from_seconds_of_day(seconds_of_day))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walltime_boundaries() {
        assert_eq!(WallTime::from_seconds_of_day(0), WallTime::MIDNIGHT);
        assert_eq!(
            WallTime::from_seconds_of_day(SECONDS_PER_DAY - 1),
            WallTime {
                hour: 23,
                minute: 59,
                second: 59
            }
        );
    }

    #[test]
    fn test_walltime_wraps_past_midnight() {
        // One full day plus one second lands back at 00:00:01
        assert_eq!(
            WallTime::from_seconds_of_day(SECONDS_PER_DAY + 1),
            WallTime {
                hour: 0,
                minute: 0,
                second: 1
            }
        );
    }

    #[test]
    fn test_walltime_mid_day() {
        // 14:03:07 = 14*3600 + 3*60 + 7
        let t = WallTime::from_seconds_of_day(14 * 3600 + 3 * 60 + 7);
        assert_eq!(
            t,
            WallTime {
                hour: 14,
                minute: 3,
                second: 7
            }
        );
    }

    #[test]
    fn test_unsynchronized_clock_yields_none() {
        let clock = WallClock::new(0);
        assert_eq!(clock.state(), SyncState::Unsynchronized);
        assert!(clock.now(123_456).is_none());
    }

    #[test]
    fn test_sync_anchors_clock() {
        let mut clock = WallClock::new(0);
        // 2024-01-01 10:20:30 UTC = 1704104430
        clock.sync(1_704_104_430, 5_000);
        assert!(clock.is_synchronized());

        let t = clock.now(5_000).unwrap();
        assert_eq!(
            t,
            WallTime {
                hour: 10,
                minute: 20,
                second: 30
            }
        );
    }

    #[test]
    fn test_clock_advances_with_monotonic_time() {
        let mut clock = WallClock::new(0);
        clock.sync(1_704_104_430, 0);

        // 90 seconds later: 10:22:00
        let t = clock.now(90_000).unwrap();
        assert_eq!(
            t,
            WallTime {
                hour: 10,
                minute: 22,
                second: 0
            }
        );
    }

    #[test]
    fn test_hour_rollover_sequence() {
        let mut clock = WallClock::new(0);
        // Anchor at 09:59:58 UTC on some day: 9*3600 + 59*60 + 58 = 35998
        clock.sync(35_998, 0);

        let samples: Vec<WallTime> = (0..3).map(|i| clock.now(i * 1000).unwrap()).collect();
        assert_eq!(
            samples,
            vec![
                WallTime {
                    hour: 9,
                    minute: 59,
                    second: 58
                },
                WallTime {
                    hour: 9,
                    minute: 59,
                    second: 59
                },
                WallTime {
                    hour: 10,
                    minute: 0,
                    second: 0
                },
            ]
        );
    }

    #[test]
    fn test_positive_utc_offset() {
        // UTC+7 (Indochina Time)
        let mut clock = WallClock::new(7 * 3600);
        // 23:30:00 UTC -> 06:30:00 local next day
        clock.sync(23 * 3600 + 30 * 60, 0);
        let t = clock.now(0).unwrap();
        assert_eq!(
            t,
            WallTime {
                hour: 6,
                minute: 30,
                second: 0
            }
        );
    }

    #[test]
    fn test_negative_utc_offset_wraps_backwards() {
        // UTC-5: 02:00:00 UTC -> 21:00:00 local previous day
        let mut clock = WallClock::new(-5 * 3600);
        clock.sync(2 * 3600, 0);
        let t = clock.now(0).unwrap();
        assert_eq!(
            t,
            WallTime {
                hour: 21,
                minute: 0,
                second: 0
            }
        );
    }

    #[test]
    fn test_resync_replaces_anchor() {
        let mut clock = WallClock::new(0);
        clock.sync(1_000, 0);
        // Re-sync an hour later with a server time that corrects local drift
        clock.sync(4_700, 3_600_000);

        let t = clock.now(3_600_000).unwrap();
        assert_eq!(t, WallTime::from_seconds_of_day(4_700));
    }

    #[test]
    fn test_stale_monotonic_reading_saturates() {
        let mut clock = WallClock::new(0);
        clock.sync(10_000, 50_000);
        // A reading older than the anchor must not underflow
        let t = clock.now(49_000).unwrap();
        assert_eq!(t, WallTime::from_seconds_of_day(10_000));
    }
}
