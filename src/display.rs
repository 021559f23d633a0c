//! Core display operations

use crate::bits::COLUMNS;
use crate::buffer::{Bitmap, FrameBuffer};
use crate::config::{BlinkRate, Config, Rotation};
use crate::error::{Error, MAX_BRIGHTNESS};
use crate::interface::DisplayInterface;
use crate::protocol;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Power, blink and brightness state of the controller
///
/// Only updated after the frame realizing the change was written, so it
/// always matches what the chip last acknowledged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// Whether the display is powered on
    pub is_on: bool,
    /// Current blink rate, latched even while off
    pub blink_rate: BlinkRate,
    /// Current brightness (0-15)
    pub brightness: u8,
}

/// Core display driver for the HT16K33 8x8 matrix
///
/// Owns the transport, the frame buffer and the power/blink/brightness
/// state. Every drawing operation updates the buffer and writes the matching
/// frame before returning. For embedded-graphics support, use
/// `GraphicDisplay` (requires `graphics` feature).
///
/// Frame writes are not suppressed while the display is off: the chip keeps
/// accepting RAM updates and shows them on the next [`on`](Self::on).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pixel state mirrored into display RAM
    buffer: FrameBuffer,
    /// Power, blink and brightness state
    state: DisplayState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display and initialize the controller
    ///
    /// Starts the oscillator, applies the configured brightness, clears
    /// display RAM and powers the display on with the configured blink rate.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBrightness` before touching the bus if
    /// `config.brightness` exceeds 15, or `Error::Interface` if any of the
    /// initialization writes fails.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        if config.brightness > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness(config.brightness));
        }

        let mut display = Self {
            interface,
            state: DisplayState {
                is_on: false,
                blink_rate: config.blink_rate,
                brightness: config.brightness,
            },
            config,
            buffer: FrameBuffer::new(),
        };
        display.init()?;
        Ok(display)
    }

    /// Initialize the controller with configuration
    fn init(&mut self) -> DisplayResult<I> {
        log::debug!("initializing HT16K33 at {:#04x}", self.config.address);

        self.send(&protocol::oscillator_on())?;
        self.set_brightness(self.config.brightness)?;
        self.clear()?;
        self.on()
    }

    /// Turn the display on
    ///
    /// Also applies a blink rate latched while the display was off.
    pub fn on(&mut self) -> DisplayResult<I> {
        self.send(&protocol::power_on(self.state.blink_rate))?;
        self.state.is_on = true;
        log::debug!("display on, blink {:?}", self.state.blink_rate);
        Ok(())
    }

    /// Turn the display off
    ///
    /// The buffer, brightness and blink rate are kept, and the display can
    /// still be drawn to while off.
    pub fn off(&mut self) -> DisplayResult<I> {
        self.send(&protocol::power_off())?;
        self.state.is_on = false;
        log::debug!("display off");
        Ok(())
    }

    /// Set brightness, 0 (dimmest) to 15 (brightest)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBrightness` if `value` exceeds 15. Nothing is
    /// written in that case.
    pub fn set_brightness(&mut self, value: u8) -> DisplayResult<I> {
        if value > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness(value));
        }
        self.send(&protocol::brightness(value))?;
        self.state.brightness = value;
        log::debug!("brightness {}", value);
        Ok(())
    }

    /// Set blinking from a raw mode
    ///
    /// * `0` - blinking off
    /// * `1` - 2 Hz
    /// * `2` - 1 Hz
    /// * `3` - 0.5 Hz
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBlinkRate` if `mode` exceeds 3. Nothing is
    /// written in that case.
    pub fn set_blinking(&mut self, mode: u8) -> DisplayResult<I> {
        let blink_rate = BlinkRate::from_raw(mode).ok_or(Error::InvalidBlinkRate(mode))?;
        self.set_blink_rate(blink_rate)
    }

    /// Set the blink rate
    ///
    /// Applied immediately while on. While off the rate is only latched and
    /// takes effect on the next [`on`](Self::on).
    pub fn set_blink_rate(&mut self, blink_rate: BlinkRate) -> DisplayResult<I> {
        if self.state.is_on {
            self.send(&protocol::power_on(blink_rate))?;
        }
        self.state.blink_rate = blink_rate;
        log::debug!("blink {:?} (on: {})", blink_rate, self.state.is_on);
        Ok(())
    }

    /// Show a bitmap, one byte per row with column 0 in the MSB
    pub fn set(&mut self, bitmap: Bitmap) -> DisplayResult<I> {
        self.buffer.replace_all(bitmap);
        self.flush()
    }

    /// Turn off every pixel
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.buffer.zero_all();
        self.flush()
    }

    /// Replace `row` with `byte`
    pub fn set_row(&mut self, row: u8, byte: u8) -> DisplayResult<I> {
        self.buffer.set_row(row, byte);
        self.send_row(row)
    }

    /// Turn off every pixel in `row`
    pub fn clear_row(&mut self, row: u8) -> DisplayResult<I> {
        self.buffer.clear_row(row);
        self.send_row(row)
    }

    /// Replace `column` with `byte`, bit 7 landing in row 0
    pub fn set_column(&mut self, column: u8, byte: u8) -> DisplayResult<I> {
        if column >= COLUMNS {
            return Ok(());
        }
        self.buffer.set_column(column, byte);
        self.flush()
    }

    /// Turn off every pixel in `column`
    pub fn clear_column(&mut self, column: u8) -> DisplayResult<I> {
        if column >= COLUMNS {
            return Ok(());
        }
        self.buffer.clear_column(column);
        self.flush()
    }

    /// Turn on the pixel at (`row`, `column`)
    pub fn set_pixel(&mut self, row: u8, column: u8) -> DisplayResult<I> {
        if column >= COLUMNS {
            return Ok(());
        }
        self.buffer.set_pixel(row, column);
        self.send_row(row)
    }

    /// Turn off the pixel at (`row`, `column`)
    pub fn clear_pixel(&mut self, row: u8, column: u8) -> DisplayResult<I> {
        if column >= COLUMNS {
            return Ok(());
        }
        self.buffer.clear_pixel(row, column);
        self.send_row(row)
    }

    /// Write the whole buffer to display RAM
    ///
    /// Brings the chip back in sync after a failed write.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let frame = protocol::full_frame(&self.buffer);
        self.send(&frame)
    }

    /// Write a single row to display RAM
    fn send_row(&mut self, row: u8) -> DisplayResult<I> {
        match protocol::row_frame(&self.buffer, row) {
            Some(frame) => self.send(&frame),
            None => Ok(()),
        }
    }

    /// Send a frame to the display controller
    fn send(&mut self, frame: &[u8]) -> DisplayResult<I> {
        log::trace!("write {:#04x}: {:02x?}", self.config.address, frame);
        self.interface
            .write(self.config.address, frame)
            .map_err(Error::Interface)
    }

    /// Whether the display is powered on
    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    /// Current blink rate
    pub fn blink_rate(&self) -> BlinkRate {
        self.state.blink_rate
    }

    /// Current brightness
    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    /// Power, blink and brightness state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Current frame buffer
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Frame buffer for drawing without sending; call [`flush`](Self::flush) afterwards
    #[cfg(feature = "graphics")]
    pub(crate) fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// I2C address of the controller
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
