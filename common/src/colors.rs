//! Color constants for the clock screen.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7735 panel and requires no conversion when
//! writing to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Screen background and erase color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Static label text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green (0, 63, 0). The live clock digits.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Dim gray for the pre-sync placeholder accent.
/// RGB565: (16, 32, 16) - roughly 50% brightness.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
