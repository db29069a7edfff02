//! Dirty-state tracking for the clock screen.
//!
//! The static labels are write-once and the time label changes at most once
//! per second, while the driver loop runs every ~10 ms. Tracking what was
//! last drawn keeps most frames free of pixel work, so the flush step only
//! runs when something actually changed.

use crate::format::TimeText;

/// Tracks what the previous frames already drew.
pub struct RenderState {
    statics_drawn: bool,
    last_time: Option<TimeText>,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            statics_drawn: false,
            last_time: None,
        }
    }

    /// True until the title and caption have been drawn once.
    pub const fn need_statics(&self) -> bool {
        !self.statics_drawn
    }

    pub fn mark_statics_drawn(&mut self) {
        self.statics_drawn = true;
    }

    /// Returns true when `text` differs from the last drawn time label, and
    /// records it as drawn.
    pub fn check_time_dirty(&mut self, text: &str) -> bool {
        if let Some(last) = &self.last_time
            && last.as_str() == text
        {
            return false;
        }

        let mut stored = TimeText::new();
        // Anything beyond the label capacity is a caller bug; keep the part
        // that fits so comparison stays consistent with what was drawn.
        let _ = stored.push_str(text);
        self.last_time = Some(stored);
        true
    }
}

impl Default for RenderState {
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
    fn test_statics_drawn_once() {
        let mut state = RenderState::new();
        assert!(state.need_statics());
        state.mark_statics_drawn();
        assert!(!state.need_statics());
    }

    #[test]
    fn test_first_time_text_is_dirty() {
        let mut state = RenderState::new();
        assert!(state.check_time_dirty("--:--:--"));
    }

    #[test]
    fn test_unchanged_text_is_clean() {
        let mut state = RenderState::new();
        assert!(state.check_time_dirty("14:03:07"));
        assert!(!state.check_time_dirty("14:03:07"));
    }

    #[test]
    fn test_each_second_marks_dirty_once() {
        let mut state = RenderState::new();
        for text in ["09:59:58", "09:59:59", "10:00:00"] {
            assert!(state.check_time_dirty(text));
            // The driver loop re-checks ~100 times before the next update
            assert!(!state.check_time_dirty(text));
        }
    }
}
