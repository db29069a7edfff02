//! ST7735 display driver with a single static framebuffer.
//!
//! The driver is split into two components:
//! - [`St7735Renderer`]: implements `DrawTarget`, writes to the framebuffer
//! - [`St7735Flusher`]: owns the SPI bus and control pins, sends the
//!   framebuffer to the panel
//!
//! At 128x160 RGB565 the framebuffer is 40 KiB. The screen content changes
//! at most once per second, so a full-frame blocking flush on change is
//! cheap (~12 ms at 26 MHz SPI) and double buffering is not worth its RAM.

use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use esp_hal::Blocking;
use esp_hal::gpio::Output;
use esp_hal::spi::master::Spi;

/// Display dimensions (portrait).
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 160;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// Static framebuffer (40,960 bytes).
static mut FRAMEBUFFER: [u8; BUFFER_SIZE] = [0u8; BUFFER_SIZE];

/// Mutable framebuffer access for rendering.
///
/// # Safety
/// Caller must ensure exclusive access; only the driver loop may hold this.
pub unsafe fn framebuffer() -> &'static mut [u8] {
    unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) }
}

/// Immutable framebuffer access for flushing.
///
/// # Safety
/// Caller must ensure no renderer is writing at the same time.
pub unsafe fn framebuffer_ref() -> &'static [u8] {
    unsafe { &*core::ptr::addr_of!(FRAMEBUFFER) }
}

// ST7735 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

/// ST7735 flusher - owns SPI and control pins, pushes frames to the panel.
pub struct St7735Flusher<'d> {
    spi: Spi<'d, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
}

impl<'d> St7735Flusher<'d> {
    pub fn new(spi: Spi<'d, Blocking>, dc: Output<'d>, cs: Output<'d>, rst: Output<'d>) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Initialize the display hardware.
    pub async fn init(&mut self) {
        // Hardware reset pulse
        self.rst.set_high();
        Timer::after_millis(10).await;
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(120).await;

        // Software reset
        self.write_command(SWRESET);
        Timer::after_millis(150).await;

        // Exit sleep mode
        self.write_command(SLPOUT);
        Timer::after_millis(120).await;

        // Set pixel format to RGB565 (16-bit)
        self.write_command(COLMOD);
        self.write_data(&[0x05]);

        // Portrait orientation, RGB panel order
        self.write_command(MADCTL);
        self.write_data(&[0x00]);

        // Normal display mode
        self.write_command(NORON);
        Timer::after_millis(10).await;

        // Display on
        self.write_command(DISPON);
        Timer::after_millis(100).await;

        // Pre-set window to full screen; every flush covers the whole panel
        self.set_window(0, 0, WIDTH as u16, HEIGHT as u16);
    }

    /// Send a command byte (DC low, CS low during transfer).
    fn write_command(&mut self, cmd: u8) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    fn write_data(&mut self, data: &[u8]) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).ok();
        self.cs.set_high();
    }

    /// Set the drawing window.
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET);
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8]);

        self.write_command(RASET);
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8]);
    }

    /// Flush the framebuffer to the display.
    ///
    /// Window is pre-configured to full screen during `init()`.
    pub fn flush_buffer(&mut self, buffer: &[u8]) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).ok();
        self.cs.set_high();
    }
}

/// ST7735 renderer - implements `DrawTarget`, writes to the framebuffer.
///
/// Handles all drawing operations against a framebuffer reference; it does
/// not own any hardware. Create a new renderer for each frame.
pub struct St7735Renderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> St7735Renderer<'a> {
    pub fn new(framebuffer: &'a mut [u8]) -> Self {
        Self { framebuffer }
    }

    /// Set a pixel in the framebuffer (big-endian RGB565, panel byte order).
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            let raw: RawU16 = color.into();
            let bytes = raw.into_inner().to_be_bytes();
            self.framebuffer[idx] = bytes[0];
            self.framebuffer[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for St7735Renderer<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for St7735Renderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // set_pixel clips, so off-screen parts of the area are skipped while
        // the color iterator stays aligned with the area's points.
        let mut colors = colors.into_iter();
        for point in area.points() {
            match colors.next() {
                Some(color) => self.set_pixel(point.x, point.y, color),
                None => break,
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        for point in drawable_area.points() {
            let idx = (point.y as usize * WIDTH + point.x as usize) * 2;
            self.framebuffer[idx] = bytes[0];
            self.framebuffer[idx + 1] = bytes[1];
        }
        Ok(())
    }
}
