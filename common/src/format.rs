//! Fixed-width `HH:MM:SS` rendering for the time label.
//!
//! The label text is a `heapless::String`, so formatting never allocates and
//! the result can cross task boundaries by value.

use core::fmt::Write;

use heapless::String;

use crate::clock::WallTime;

/// Text buffer for the time label. `HH:MM:SS` is 8 bytes; a little headroom
/// keeps the type reusable for the placeholder and debug variants.
pub type TimeText = String<16>;

/// Shown while the clock is still waiting for its first SNTP result.
/// Same width as a formatted time, so the label geometry never changes.
pub const TIME_PLACEHOLDER: &str = "--:--:--";

/// Format a time as zero-padded `HH:MM:SS`.
///
/// Always produces exactly 8 ASCII characters for a valid [`WallTime`].
pub fn format_hms(time: WallTime) -> TimeText {
    let mut out = TimeText::new();
    // 8 bytes into a 16-byte buffer; cannot fail
    let _ = write!(out, "{:02}:{:02}:{:02}", time.hour, time.minute, time.second);
    out
}

/// The placeholder as an owned [`TimeText`].
pub fn placeholder_text() -> TimeText {
    let mut out = TimeText::new();
    let _ = out.push_str(TIME_PLACEHOLDER);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_midnight() {
        assert_eq!(format_hms(WallTime::MIDNIGHT).as_str(), "00:00:00");
    }

    #[test]
    fn test_format_end_of_day() {
        let t = WallTime {
            hour: 23,
            minute: 59,
            second: 59,
        };
        assert_eq!(format_hms(t).as_str(), "23:59:59");
    }

    #[test]
    fn test_format_zero_pads_each_field() {
        let t = WallTime {
            hour: 1,
            minute: 2,
            second: 3,
        };
        assert_eq!(format_hms(t).as_str(), "01:02:03");
    }

    #[test]
    fn test_format_sampled_afternoon_time() {
        let t = WallTime {
            hour: 14,
            minute: 3,
            second: 7,
        };
        assert_eq!(format_hms(t).as_str(), "14:03:07");
    }

    #[test]
    fn test_format_is_always_eight_chars() {
        for hour in [0u8, 9, 10, 23] {
            for minute in [0u8, 9, 10, 59] {
                for second in [0u8, 9, 10, 59] {
                    let text = format_hms(WallTime {
                        hour,
                        minute,
                        second,
                    });
                    assert_eq!(text.len(), 8, "{text}");
                    let bytes = text.as_bytes();
                    assert_eq!(bytes[2], b':');
                    assert_eq!(bytes[5], b':');
                    for (i, b) in bytes.iter().enumerate() {
                        if i != 2 && i != 5 {
                            assert!(b.is_ascii_digit(), "{text}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let t = WallTime {
            hour: 7,
            minute: 8,
            second: 9,
        };
        assert_eq!(format_hms(t), format_hms(t));
    }

    #[test]
    fn test_placeholder_matches_time_width() {
        assert_eq!(placeholder_text().len(), 8);
        assert_eq!(placeholder_text().as_str(), TIME_PLACEHOLDER);
    }
}
