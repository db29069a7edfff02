//! Common types and logic for the medclock appliance.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the ESP32 hardware implementation:
//!
//! - [`clock`]: Wall-clock model with explicit SNTP sync state
//! - [`format`]: Fixed-width `HH:MM:SS` rendering of the time label
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: Layout, cadence, and time-source configuration constants
//! - [`styles`]: Pre-computed text styles
//! - [`widgets`]: Text label widget with erase-and-redraw semantics
//! - [`render`]: Dirty-state tracking so unchanged labels are not redrawn
//! - [`screen`]: Composition of the three labels into the clock screen
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! It avoids any dependency on `std::time` or platform-specific types;
//! callers pass monotonic milliseconds in from whatever clock they have.
//! Tests build with `std` for the host test harness.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod format;
pub mod render;
pub mod screen;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use clock::{SyncState, WallClock, WallTime};
pub use format::{TIME_PLACEHOLDER, TimeText, format_hms, placeholder_text};
pub use screen::ClockScreen;
