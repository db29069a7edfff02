//! Hardware bring-up and the redraw driver loop.

use defmt::info;
use embassy_executor::Spawner;
use embassy_net::StackResources;
use embassy_time::Timer;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::rng::Rng;
use esp_hal::spi::master::Spi;
use esp_hal::timer::timg::TimerGroup;
use esp_wifi::EspWifiController;
use medclock_common::config::FRAME_MS;
use medclock_common::{ClockScreen, placeholder_text};
use static_cell::StaticCell;
use {esp_backtrace as _, esp_println as _};

use crate::display::spi_config;
use crate::st7735::{St7735Flusher, St7735Renderer};
use crate::tasks::clock::{TIME_TEXT, clock_update_task};
use crate::tasks::net::{connection_task, net_task};
use crate::tasks::sync::sntp_task;

// App descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    info!("medclock starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // esp-wifi needs an allocator for its internal buffers
    esp_alloc::heap_allocator!(size: 72 * 1024);

    // Embassy time driver: the millisecond tick behind Timer/Instant
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    // WiFi bring-up
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    let mut rng = Rng::new(peripherals.RNG);
    static WIFI_CTRL: StaticCell<EspWifiController<'static>> = StaticCell::new();
    let wifi_ctrl = WIFI_CTRL.init(esp_wifi::init(timg1.timer0, rng).expect("WiFi init failed"));
    let (controller, interfaces) =
        esp_wifi::wifi::new(wifi_ctrl, peripherals.WIFI).expect("WiFi interface creation failed");

    // Network stack with DHCP
    let net_config = embassy_net::Config::dhcpv4(Default::default());
    let seed = (u64::from(rng.random()) << 32) | u64::from(rng.random());
    static RESOURCES: StaticCell<StackResources<4>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(interfaces.sta, net_config, RESOURCES.init(StackResources::new()), seed);

    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(connection_task(controller)).unwrap();
    spawner.spawn(sntp_task(stack)).unwrap();
    info!("Network tasks spawned");

    // Display bring-up: SPI2 with the 1.8" ST7735 module wiring
    // SCLK=GPIO18, MOSI=GPIO23, CS=GPIO5, DC=GPIO2, RST=GPIO4, BL=GPIO15
    let spi = Spi::new(peripherals.SPI2, spi_config())
        .expect("SPI init failed")
        .with_sck(peripherals.GPIO18)
        .with_mosi(peripherals.GPIO23);
    let dc = Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default());
    let cs = Output::new(peripherals.GPIO5, Level::High, OutputConfig::default());
    let rst = Output::new(peripherals.GPIO4, Level::High, OutputConfig::default());
    let mut backlight = Output::new(peripherals.GPIO15, Level::Low, OutputConfig::default());

    let mut flusher = St7735Flusher::new(spi, dc, cs, rst);
    flusher.init().await;
    backlight.set_high();
    info!("Display initialized");

    spawner.spawn(clock_update_task(TIME_TEXT.dyn_sender())).unwrap();
    info!("Clock update task spawned");

    // Redraw driver loop: pick up the latest published label text, redraw
    // what changed, and flush only when pixels actually moved.
    let mut screen = ClockScreen::new();
    let mut time_text = placeholder_text();
    let mut receiver = TIME_TEXT.dyn_receiver().unwrap();

    loop {
        if let Some(text) = receiver.try_get() {
            time_text = text;
        }

        let dirty = {
            // SAFETY: The framebuffer is only accessed from this loop
            let mut renderer = St7735Renderer::new(unsafe { crate::st7735::framebuffer() });
            screen.draw_frame(&mut renderer, &time_text)
        };

        if dirty {
            flusher.flush_buffer(unsafe { crate::st7735::framebuffer_ref() });
        }

        Timer::after_millis(FRAME_MS).await;
    }
}
