//! HT16K33 8x8 LED Matrix Driver
//!
//! A driver for 8x8 monochrome LED matrices on the HT16K33 LED controller,
//! such as the Adafruit 8x8 LED backpack.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 I2C support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Pixel, row, column and whole-bitmap drawing
//! - Power, blink rate and brightness control
//! - Rotation support for the graphics layer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use matrix8x8::{BlinkRate, Builder, Display, Interface};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let config = match Builder::new().address(0x70).brightness(15).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(Interface::new(i2c), config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = display.set([0xFF; 8]); // turn on all LEDs
//! let _ = display.clear(); // turn off all LEDs
//! let _ = display.set_row(2, 0xFF); // turn on all LEDs in row 2
//! let _ = display.set_column(3, 0xFF); // turn on all LEDs in column 3
//! let _ = display.set_pixel(7, 6); // turn on LED at row 7, column 6
//! let _ = display.set_blink_rate(BlinkRate::Medium);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Bit manipulation helpers
pub mod bits;
/// In-memory frame buffer
pub mod buffer;
/// HT16K33 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Wire frame encoding
pub mod protocol;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::{Bitmap, FrameBuffer};
pub use config::{
    BlinkRate, Builder, Config, DEFAULT_ADDRESS, DEFAULT_BRIGHTNESS, MAX_BLINK_RATE,
    MAX_BRIGHTNESS, Rotation,
};
pub use display::{Display, DisplayState};
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, Interface};

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
