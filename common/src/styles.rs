//! Pre-computed text styles for the clock screen.
//!
//! `MonoTextStyle::new` is const, so all styles are built at compile time.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use profont::{PROFONT_10_POINT, PROFONT_14_POINT};

use crate::colors::{GRAY, GREEN, WHITE};

/// Title line ("Lich nhac!").
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Caption line ("Uong thuoc luc:").
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_10_POINT, WHITE);

/// Live clock digits.
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, GREEN);

/// Placeholder shown while waiting for the first SNTP sync.
pub const TIME_PENDING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, GRAY);
