//! Medication-reminder clock firmware for the ESP32.
//!
//! Renders two static labels and a live `HH:MM:SS` clock on a 128x160
//! ST7735 panel, with wall-clock time kept in sync over SNTP.
//!
//! # Architecture
//!
//! Four Embassy tasks cooperate around two pieces of shared state:
//! - connection + net-stack tasks keep WiFi and DHCP alive;
//! - the SNTP task anchors the shared [`WallClock`] (initial retry every
//!   10 s, then hourly re-anchor);
//! - the clock task samples the wall clock once per second, formats it, and
//!   publishes the label text through a `Watch`;
//! - the main loop redraws dirty labels every ~10 ms and flushes the
//!   framebuffer only when something changed.
//!
//! Until the first SNTP result the clock label shows `--:--:--` instead of
//! a bogus epoch time.
//!
//! [`WallClock`]: medclock_common::WallClock

#![cfg_attr(target_arch = "xtensa", no_std)]
#![cfg_attr(target_arch = "xtensa", no_main)]

#[cfg(target_arch = "xtensa")]
mod app;
#[cfg(target_arch = "xtensa")]
mod display;
#[cfg(target_arch = "xtensa")]
mod st7735;
#[cfg(target_arch = "xtensa")]
mod tasks;

/// The firmware entry point lives in [`app`]; this stub keeps host-side
/// workspace builds compiling without the xtensa toolchain.
#[cfg(not(target_arch = "xtensa"))]
fn main() {
    eprintln!("medclock-esp32 targets the ESP32; build it with the xtensa-esp32-none-elf toolchain");
}
