//! Display configuration for the 1.8" ST7735 TFT module (128x160).
//!
//! Pin mapping:
//! - CLK: GPIO18 (SPI2 SCK)
//! - MOSI: GPIO23 (SPI2 MOSI)
//! - CS: GPIO5
//! - DC: GPIO2
//! - RST: GPIO4
//! - Backlight: GPIO15 (driven high at startup)

use esp_hal::spi::Mode;
use esp_hal::spi::master::Config as SpiConfig;
use esp_hal::time::Rate;

/// SPI configuration for the ST7735 display.
/// The ST7735 datasheet caps the serial clock at ~15 MHz for writes; the
/// common modules run fine at 26 MHz, which the ESP32 derives cleanly from
/// its 80 MHz APB clock.
pub fn spi_config() -> SpiConfig {
    SpiConfig::default().with_frequency(Rate::from_mhz(26)).with_mode(Mode::_0)
}
