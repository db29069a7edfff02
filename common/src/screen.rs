//! The clock screen: two static labels and the live time label.
//!
//! [`ClockScreen`] is the single owner of the label handles. It is created
//! once at startup and passed by mutable reference into the redraw driver
//! loop; the clock-formatting side only hands over the current text. This
//! replaces the file-scope widget handle of a typical C firmware with an
//! explicitly owned value.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use profont::{PROFONT_10_POINT, PROFONT_14_POINT};

use crate::colors::BLACK;
use crate::config::{SCHEDULE_DX, SCHEDULE_DY, SCHEDULE_TEXT, TIME_DX, TIME_DY, TITLE_DY, TITLE_TEXT};
use crate::format::TIME_PLACEHOLDER;
use crate::render::RenderState;
use crate::styles::{CAPTION_STYLE, TIME_PENDING_STYLE, TIME_STYLE, TITLE_STYLE};
use crate::widgets::{Anchor, TextLabel};

/// The full screen composition and its render state.
pub struct ClockScreen {
    title: TextLabel,
    caption: TextLabel,
    time: TextLabel,
    state: RenderState,
}

impl ClockScreen {
    pub fn new() -> Self {
        Self {
            title: TextLabel::new(Anchor::TopMid, 0, TITLE_DY, TITLE_TEXT.len(), &PROFONT_14_POINT),
            caption: TextLabel::new(
                Anchor::TopLeft,
                SCHEDULE_DX,
                SCHEDULE_DY,
                SCHEDULE_TEXT.len(),
                &PROFONT_10_POINT,
            ),
            time: TextLabel::new(Anchor::TopLeft, TIME_DX, TIME_DY, TIME_PLACEHOLDER.len(), &PROFONT_14_POINT),
            state: RenderState::new(),
        }
    }

    /// Draw whatever changed since the last frame into `display`.
    ///
    /// `time_text` is the latest published clock string (a formatted time or
    /// the pre-sync placeholder). Returns true when any pixels changed, which
    /// tells the driver loop whether a flush is needed.
    pub fn draw_frame<D>(&mut self, display: &mut D, time_text: &str) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut dirty = false;

        if self.state.need_statics() {
            display.clear(BLACK).ok();
            self.title.draw(display, TITLE_TEXT, TITLE_STYLE);
            self.caption.draw(display, SCHEDULE_TEXT, CAPTION_STYLE);
            self.state.mark_statics_drawn();
            dirty = true;
        }

        if self.state.check_time_dirty(time_text) {
            let style = if time_text == TIME_PLACEHOLDER {
                TIME_PENDING_STYLE
            } else {
                TIME_STYLE
            };
            self.time.draw(display, time_text, style);
            dirty = true;
        }

        dirty
    }
}

impl Default for ClockScreen {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    fn test_display() -> MockDisplay<Rgb565> {
        // The mock is 64x64 while the panel is 128x160; allow drawing past
        // its edge and repeated fills of the same pixel.
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_first_frame_draws_everything() {
        let mut screen = ClockScreen::new();
        let mut display = test_display();
        assert!(screen.draw_frame(&mut display, TIME_PLACEHOLDER));
    }

    #[test]
    fn test_steady_state_frame_is_clean() {
        let mut screen = ClockScreen::new();
        let mut display = test_display();
        screen.draw_frame(&mut display, "14:03:07");
        // Driver loop iterations between clock updates see the same text
        assert!(!screen.draw_frame(&mut display, "14:03:07"));
        assert!(!screen.draw_frame(&mut display, "14:03:07"));
    }

    #[test]
    fn test_time_change_marks_frame_dirty() {
        let mut screen = ClockScreen::new();
        let mut display = test_display();
        screen.draw_frame(&mut display, "09:59:59");
        assert!(screen.draw_frame(&mut display, "10:00:00"));
    }

    #[test]
    fn test_placeholder_then_first_fix() {
        let mut screen = ClockScreen::new();
        let mut display = test_display();
        assert!(screen.draw_frame(&mut display, TIME_PLACEHOLDER));
        assert!(!screen.draw_frame(&mut display, TIME_PLACEHOLDER));
        // First SNTP fix swaps the placeholder for a real time
        assert!(screen.draw_frame(&mut display, "06:30:00"));
    }
}
