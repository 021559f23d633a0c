//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps [`Display`]
//! and implements the [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem.
//!
//! Drawing only touches the frame buffer; call [`GraphicDisplay::update`] to
//! send the result to the matrix in one full-buffer write.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle, Rectangle},
//! };
//! use matrix8x8::{Config, Display, GraphicDisplay, Interface};
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
//! let display = match Display::new(Interface::new(MockI2c), Config::default()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let mut display = GraphicDisplay::new(display);
//!
//! // Frame around the edge
//! let _ = Rectangle::new(Point::zero(), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! // Diagonal
//! let _ = Line::new(Point::new(0, 0), Point::new(7, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.update();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::bits::COLUMNS;
use crate::buffer::ROWS;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

/// Display with embedded-graphics support
///
/// `BinaryColor::On` lights an LED, `BinaryColor::Off` turns it off.
/// Coordinates are mapped through the configured
/// [`Rotation`](crate::config::Rotation).
pub struct GraphicDisplay<I>
where
    I: DisplayInterface,
{
    /// The underlying display driver
    display: Display<I>,
}

impl<I> GraphicDisplay<I>
where
    I: DisplayInterface,
{
    /// Create a new GraphicDisplay
    pub fn new(display: Display<I>) -> Self {
        Self { display }
    }

    /// Send the frame buffer to the matrix
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the bus write fails.
    pub fn update(&mut self) -> GraphicsResult<I> {
        self.display.flush()
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Useful for power, blink and brightness control. Drawing primitives
    /// on [`Display`] write to the matrix immediately.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Consume the wrapper and return the Display
    pub fn into_inner(self) -> Display<I> {
        self.display
    }

    /// Set a single pixel in the frame buffer
    fn set_pixel(&mut self, x: u8, y: u8, color: BinaryColor) {
        let Some((row, column)) = apply_rotation(x, y, self.display.rotation()) else {
            return;
        };
        let buffer = self.display.buffer_mut();
        match color {
            BinaryColor::On => buffer.set_pixel(row, column),
            BinaryColor::Off => buffer.clear_pixel(row, column),
        }
    }
}

impl<I> DrawTarget for GraphicDisplay<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) else {
                continue;
            };
            self.set_pixel(x, y, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.display.buffer_mut().replace_all([fill; ROWS as usize]);
        Ok(())
    }
}

impl<I> OriginDimensions for GraphicDisplay<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(COLUMNS as u32, ROWS as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::FrameBuffer;
    use crate::config::{Builder, Rotation};
    use crate::protocol;
    use alloc::vec::Vec;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle},
    };

    /// Frames written by `Display::new`
    const INIT_WRITES: usize = 4;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<Vec<u8>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn write(&mut self, _address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            self.writes.push(bytes.to_vec());
            Ok(())
        }
    }

    fn test_display(rotation: Rotation) -> GraphicDisplay<MockInterface> {
        let config = Builder::new().rotation(rotation).build().unwrap();
        GraphicDisplay::new(Display::new(MockInterface::default(), config).unwrap())
    }

    fn writes(display: GraphicDisplay<MockInterface>) -> Vec<Vec<u8>> {
        display.into_inner().release().writes
    }

    #[test]
    fn test_size_is_eight_by_eight() {
        let display = test_display(Rotation::Rotate90);
        assert_eq!(display.size(), Size::new(8, 8));
    }

    #[test]
    fn test_drawing_does_not_write_until_update() {
        let mut display = test_display(Rotation::Rotate0);
        Pixel(Point::new(1, 1), BinaryColor::On)
            .draw(&mut display)
            .unwrap();
        assert_eq!(writes(display).len(), INIT_WRITES);

        let mut display = test_display(Rotation::Rotate0);
        Pixel(Point::new(1, 1), BinaryColor::On)
            .draw(&mut display)
            .unwrap();
        display.update().unwrap();
        assert_eq!(writes(display).len(), INIT_WRITES + 1);
    }

    #[test]
    fn test_draw_diagonal_line() {
        let mut display = test_display(Rotation::Rotate0);
        Line::new(Point::new(0, 0), Point::new(7, 7))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        assert_eq!(
            display.display().buffer().rows(),
            &[0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01]
        );
    }

    #[test]
    fn test_pixels_follow_rotation() {
        let mut display = test_display(Rotation::Rotate180);
        Pixel(Point::new(0, 0), BinaryColor::On)
            .draw(&mut display)
            .unwrap();

        let buffer = display.display().buffer();
        assert!(buffer.pixel(7, 7));
        assert_eq!(buffer.rows().iter().filter(|row| **row != 0).count(), 1);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_ignored() {
        let mut display = test_display(Rotation::Rotate0);
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, -1), BinaryColor::On),
                Pixel(Point::new(8, 0), BinaryColor::On),
                Pixel(Point::new(0, 300), BinaryColor::On),
            ])
            .unwrap();
        assert!(display.display().buffer().is_blank());
    }

    #[test]
    fn test_clear_and_update() {
        let mut display = test_display(Rotation::Rotate0);
        display.clear(BinaryColor::On).unwrap();
        Pixel(Point::new(3, 2), BinaryColor::Off)
            .draw(&mut display)
            .unwrap();
        display.update().unwrap();

        let mut expected = [0xFF; 8];
        expected[2] = 0xEF;
        let written = writes(display);
        assert_eq!(
            written.last().map(Vec::as_slice),
            Some(&protocol::full_frame(&FrameBuffer::from_rows(expected))[..])
        );
    }
}
