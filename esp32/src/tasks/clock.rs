//! Clock-formatting task: one wall-clock sample per second.
//!
//! Samples the shared [`WallClock`](medclock_common::WallClock), formats it
//! as `HH:MM:SS` (or the placeholder while unsynchronized), and publishes
//! the text through a `Watch`. The render loop reads the newest value; a
//! reader never observes a partially written string.

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::{DynSender, Watch};
use embassy_time::{Instant, Timer};
use medclock_common::config::CLOCK_UPDATE_MS;
use medclock_common::{TimeText, format_hms, placeholder_text};

use super::WALL_CLOCK;

/// Latest published time label text.
/// The clock task writes, the render loop reads the latest value.
pub static TIME_TEXT: Watch<CriticalSectionRawMutex, TimeText, 2> = Watch::new();

#[embassy_executor::task]
pub async fn clock_update_task(sender: DynSender<'static, TimeText>) {
    info!("Clock update task started");

    let mut had_fix = false;

    loop {
        let sampled = WALL_CLOCK.lock().await.now(Instant::now().as_millis());

        if sampled.is_some() && !had_fix {
            info!("Wall clock synchronized, showing real time");
            had_fix = true;
        }

        let text = match sampled {
            Some(time) => format_hms(time),
            None => placeholder_text(),
        };
        sender.send(text);

        Timer::after_millis(CLOCK_UPDATE_MS).await;
    }
}
