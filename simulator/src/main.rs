//! Desktop simulator for the medclock appliance.
//!
//! Runs the same screen and loop logic as the firmware against
//! `embedded-graphics-simulator`, with the host system clock standing in for
//! SNTP. The first sync is deliberately delayed a few seconds so the pre-sync
//! placeholder state is visible.
//!
//! By default this runs headless for a few seconds and writes a
//! `medclock.png` snapshot; build with `--features sdl` for a live window.

mod clock_source;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use medclock_common::config::{CLOCK_UPDATE_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use medclock_common::{ClockScreen, TimeText, format_hms, placeholder_text};

use crate::clock_source::HostClock;
use crate::timing::{FRAME_TIME, SYNC_DELAY};

/// Application state shared by the windowed and headless loops.
struct Simulation {
    screen: ClockScreen,
    clock: HostClock,
    time_text: TimeText,
    started: Instant,
    last_update: Option<Instant>,
}

impl Simulation {
    fn new() -> Self {
        Self {
            screen: ClockScreen::new(),
            clock: HostClock::new(),
            time_text: placeholder_text(),
            started: Instant::now(),
            last_update: None,
        }
    }

    /// One driver-loop iteration: sync stand-in, 1 Hz clock update, redraw.
    /// Returns true when the frame changed any pixels.
    fn tick(&mut self, display: &mut SimulatorDisplay<Rgb565>) -> bool {
        // Stand-in for the SNTP task: anchor once after SYNC_DELAY
        if !self.clock.is_synchronized() && self.started.elapsed() >= SYNC_DELAY {
            self.clock.sync_from_system();
            println!("clock synchronized from host time");
        }

        // Clock-formatting cadence: one sample per second
        let update_due = self
            .last_update
            .is_none_or(|t| t.elapsed().as_millis() as u64 >= CLOCK_UPDATE_MS);
        if update_due {
            self.time_text = match self.clock.now() {
                Some(t) => format_hms(t),
                None => placeholder_text(),
            };
            self.last_update = Some(Instant::now());
        }

        self.screen.draw_frame(display, &self.time_text)
    }
}

#[cfg(feature = "sdl")]
fn run(display: &mut SimulatorDisplay<Rgb565>) {
    use embedded_graphics_simulator::{SimulatorEvent, Window};

    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("medclock", &output_settings);
    let mut sim = Simulation::new();

    loop {
        if sim.tick(display) {
            window.update(display);
        }

        for event in window.events() {
            if event == SimulatorEvent::Quit {
                return;
            }
        }

        thread::sleep(FRAME_TIME);
    }
}

#[cfg(not(feature = "sdl"))]
fn run(display: &mut SimulatorDisplay<Rgb565>) {
    use crate::timing::HEADLESS_FRAMES;

    let mut sim = Simulation::new();

    for _ in 0..HEADLESS_FRAMES {
        sim.tick(display);
        thread::sleep(FRAME_TIME);
    }

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    match display.to_rgb_output_image(&output_settings).save_png("medclock.png") {
        Ok(()) => println!("snapshot written to medclock.png"),
        Err(e) => eprintln!("failed to write snapshot: {e}"),
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    run(&mut display);
}
