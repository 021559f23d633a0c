//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the HT16K33 controller over I2C.
//!
//! The driver only ever needs one bus primitive: write a byte sequence to a
//! device address. Bus setup (pins, clock speed, scanning) stays with the
//! caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use matrix8x8::{DisplayInterface, Interface};
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
//! // Wrap any embedded-hal I2C bus
//! let mut interface = Interface::new(MockI2c);
//!
//! // Oscillator on
//! let _ = interface.write(0x70, &[0x21]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the HT16K33 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with anything that can write
/// bytes to a device address.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// on your own type to record frames in tests or to route writes through a
/// shared bus manager.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `bytes` to the device at `address` in a single transfer
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write does not complete.
    fn write(&mut self, address: u8, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Hardware interface implementation for the HT16K33
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
///
/// ## Example
///
/// ```rust,no_run
/// use matrix8x8::{Config, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = Interface::new(MockI2c);
///
/// // Use with Display
/// let _display = Display::new(interface, Config::default());
/// ```
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the interface and return the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(address, bytes)
    }
}
