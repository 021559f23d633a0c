//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! Argument errors are reported before anything is written to the bus, so a
//! rejected call leaves both the driver and the chip unchanged.
//!
//! ## Example
//!
//! ```
//! use matrix8x8::{Builder, BuilderError};
//!
//! let result = Builder::new().brightness(16).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBrightness(16))));
//! ```

use crate::interface::DisplayInterface;

/// Highest brightness level supported by the HT16K33 dimming register
pub const MAX_BRIGHTNESS: u8 = 15;

/// Highest raw blink mode supported by the HT16K33 display setup register
pub const MAX_BLINK_RATE: u8 = 3;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    /// The driver does not retry; the in-memory buffer may be ahead of the
    /// chip until the next successful [`flush`](crate::Display::flush).
    Interface(I::Error),
    /// Brightness outside 0..=15
    InvalidBrightness(u8),
    /// Blink mode outside 0..=3
    InvalidBlinkRate(u8),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidBrightness(value) => {
                write!(f, "Invalid brightness {value} (max {MAX_BRIGHTNESS})")
            }
            Self::InvalidBlinkRate(mode) => {
                write!(f, "Invalid blink mode {mode} (max {MAX_BLINK_RATE})")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Initial brightness outside 0..=15
    InvalidBrightness(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBrightness(value) => {
                write!(f, "Invalid brightness {value} (max {MAX_BRIGHTNESS})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
