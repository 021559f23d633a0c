//! HT16K33 command definitions
//!
//! This module defines the command bytes used to control the HT16K33 LED
//! controller. Every command is a single byte written to the chip's I2C
//! address; display RAM writes follow the RAM address byte with data bytes.
//!
//! ## Command Structure
//!
//! The upper nibble selects the register, the lower nibble carries the
//! argument:
//!
//! | Register | Byte |
//! |----------|------|
//! | System setup | `0x20 \| osc` |
//! | Display setup | `0x80 \| blink << 1 \| on` |
//! | Dimming | `0xE0 \| level` |
//! | Display RAM pointer | `0x00..=0x0F` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use matrix8x8::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
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
//! # let mut interface = Interface::new(MockI2c);
//! // Start the oscillator
//! let _ = interface.write(0x70, &[command::OSCILLATOR_ON]);
//!
//! // Display on, no blinking
//! let _ = interface.write(0x70, &[command::DISPLAY_SETUP | command::DISPLAY_ON]);
//! ```

// System setup

/// System setup register (0x20)
///
/// Bit 0 (S) enables the internal oscillator.
pub const SYSTEM_SETUP: u8 = 0x20;

/// Oscillator on (0x21)
///
/// Must be issued before anything else; the chip drives no LEDs until the
/// oscillator runs.
pub const OSCILLATOR_ON: u8 = SYSTEM_SETUP | 0x01;

// Display setup

/// Display setup register (0x80)
///
/// - Bit 0 (D): display on
/// - Bits 1-2 (B1, B0): blink rate
///
/// Written alone, it turns the display off.
pub const DISPLAY_SETUP: u8 = 0x80;

/// Display on flag for [`DISPLAY_SETUP`]
pub const DISPLAY_ON: u8 = 0x01;

/// Display off (0x80)
pub const DISPLAY_OFF: u8 = DISPLAY_SETUP;

/// Bit position of the blink rate within [`DISPLAY_SETUP`]
pub const BLINK_SHIFT: u8 = 1;

// Dimming

/// Dimming set register (0xE0)
///
/// The lower nibble selects one of 16 duty cycles, 1/16 to 16/16.
pub const DIMMING_SET: u8 = 0xE0;

// Display RAM

/// Display RAM start address (0x00)
///
/// The chip auto-increments the RAM pointer after each data byte. Each
/// matrix row occupies the even address `2 * row`; the odd addresses
/// drive the unused COM outputs.
pub const DISPLAY_RAM_START: u8 = 0x00;

/// Size of display RAM in bytes
pub const DISPLAY_RAM_SIZE: usize = 16;

/// Display RAM address for each matrix row
pub const ROW_ADDRESSES: [u8; 8] = [0x00, 0x02, 0x04, 0x06, 0x08, 0x0A, 0x0C, 0x0E];
