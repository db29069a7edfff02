//! Drawable widgets for the clock screen.

mod labels;

pub use labels::{Anchor, TextLabel, anchor_origin, text_pixel_width};
