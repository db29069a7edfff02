//! Text label widget with erase-and-redraw semantics.
//!
//! The panel has no compositor, so updating a label means filling its
//! bounding rectangle with the background color and drawing the new text on
//! top. Each label's geometry is fixed at construction (anchor plus the
//! maximum character count it will ever hold), which keeps the erase
//! rectangle stable across updates.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::colors::BLACK;
use crate::config::SCREEN_WIDTH;

/// Label anchoring, relative to the top edge of the screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    /// Origin at `(dx, dy)` from the top-left corner.
    TopLeft,
    /// Horizontally centered, then shifted by `(dx, dy)`.
    TopMid,
}

/// Pixel width of `chars` characters in a monospaced font.
pub const fn text_pixel_width(font: &MonoFont<'_>, chars: usize) -> u32 {
    (font.character_size.width + font.character_spacing) * chars as u32
}

/// Compute the top-left origin of a label of `content_width` pixels.
pub const fn anchor_origin(anchor: Anchor, screen_width: u32, content_width: u32, dx: i32, dy: i32) -> Point {
    match anchor {
        Anchor::TopLeft => Point::new(dx, dy),
        Anchor::TopMid => Point::new((screen_width as i32 - content_width as i32) / 2 + dx, dy),
    }
}

/// A single text label with a fixed position and erase area.
pub struct TextLabel {
    origin: Point,
    area: Size,
}

impl TextLabel {
    /// Lay out a label for at most `chars` characters of `font`.
    pub const fn new(anchor: Anchor, dx: i32, dy: i32, chars: usize, font: &MonoFont<'_>) -> Self {
        let width = text_pixel_width(font, chars);
        Self {
            origin: anchor_origin(anchor, SCREEN_WIDTH, width, dx, dy),
            area: Size::new(width, font.character_size.height),
        }
    }

    /// Top-left corner of the label.
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Erase the label area and draw `text` over it.
    ///
    /// The erase-then-draw pair lands in the framebuffer before any flush, so
    /// the panel never shows a half-updated label.
    pub fn draw<D>(&self, display: &mut D, text: &str, style: MonoTextStyle<'static, Rgb565>)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Rectangle::new(self.origin, self.area)
            .into_styled(PrimitiveStyle::with_fill(BLACK))
            .draw(display)
            .ok();

        Text::with_baseline(text, self.origin, style, Baseline::Top)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use profont::PROFONT_14_POINT;

    use super::*;

    #[test]
    fn test_top_left_origin_is_offset() {
        let p = anchor_origin(Anchor::TopLeft, 128, 80, 5, 50);
        assert_eq!(p, Point::new(5, 50));
    }

    #[test]
    fn test_top_mid_centers_content() {
        let p = anchor_origin(Anchor::TopMid, 128, 100, 0, 5);
        assert_eq!(p, Point::new(14, 5));
    }

    #[test]
    fn test_top_mid_with_content_wider_than_screen() {
        // Wider-than-screen content pushes the origin left of zero rather
        // than wrapping.
        let p = anchor_origin(Anchor::TopMid, 128, 150, 0, 0);
        assert_eq!(p, Point::new(-11, 0));
    }

    #[test]
    fn test_pixel_width_scales_with_char_count() {
        let one = text_pixel_width(&PROFONT_14_POINT, 1);
        assert_eq!(text_pixel_width(&PROFONT_14_POINT, 8), one * 8);
        assert_eq!(text_pixel_width(&PROFONT_14_POINT, 0), 0);
    }

    #[test]
    fn test_label_geometry_fixed_at_construction() {
        let label = TextLabel::new(Anchor::TopLeft, 5, 50, 8, &PROFONT_14_POINT);
        assert_eq!(label.origin(), Point::new(5, 50));
    }
}
