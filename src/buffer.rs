//! In-memory pixel state of the matrix
//!
//! [`FrameBuffer`] holds one byte per row. Bit 7 (MSB) of a row is column 0
//! and bit 0 is column 7, the same layout used by bitmaps handed to
//! [`Display::set`](crate::Display::set).
//!
//! The buffer never talks to hardware; [`Display`](crate::Display) decides
//! which frames to send after each mutation.
//!
//! Row and column indices outside `0..8` leave the buffer untouched.
//!
//! ## Example
//!
//! ```
//! use matrix8x8::FrameBuffer;
//!
//! let mut buffer = FrameBuffer::new();
//! buffer.set_pixel(7, 6);
//! assert_eq!(buffer.row(7), 0x02);
//!
//! buffer.set_column(3, 0xFF);
//! assert!(buffer.rows().iter().all(|row| row & 0x10 != 0));
//! ```

use crate::bits::{COLUMNS, column_mask, shift_bit_between_columns};

/// Number of rows in the matrix
pub const ROWS: u8 = 8;

/// Raw bitmap, one byte per row
pub type Bitmap = [u8; ROWS as usize];

/// 8x8 monochrome frame buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: Bitmap,
}

impl FrameBuffer {
    /// Create an all-off buffer
    pub const fn new() -> Self {
        Self {
            rows: [0; ROWS as usize],
        }
    }

    /// Create a buffer from an existing bitmap
    pub const fn from_rows(rows: Bitmap) -> Self {
        Self { rows }
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &Bitmap {
        &self.rows
    }

    /// Byte for `row`, or `0` when `row` is out of range
    pub fn row(&self, row: u8) -> u8 {
        self.rows.get(row as usize).copied().unwrap_or(0)
    }

    /// Whether the pixel at (`row`, `column`) is lit
    pub fn pixel(&self, row: u8, column: u8) -> bool {
        self.row(row) & column_mask(column) != 0
    }

    /// Whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }

    /// Turn on the pixel at (`row`, `column`)
    pub fn set_pixel(&mut self, row: u8, column: u8) {
        if let Some(byte) = self.rows.get_mut(row as usize) {
            *byte |= column_mask(column);
        }
    }

    /// Turn off the pixel at (`row`, `column`)
    pub fn clear_pixel(&mut self, row: u8, column: u8) {
        if let Some(byte) = self.rows.get_mut(row as usize) {
            *byte &= !column_mask(column);
        }
    }

    /// Replace `row` with `byte`
    pub fn set_row(&mut self, row: u8, byte: u8) {
        if let Some(value) = self.rows.get_mut(row as usize) {
            *value = byte;
        }
    }

    /// Turn off every pixel in `row`
    pub fn clear_row(&mut self, row: u8) {
        self.set_row(row, 0);
    }

    /// Replace `column` with the bits of `byte`
    ///
    /// Bit 7 of `byte` lands in row 0 and bit 0 in row 7. The column is
    /// cleared first, so `byte == 0` is equivalent to [`clear_column`](Self::clear_column).
    pub fn set_column(&mut self, column: u8, byte: u8) {
        self.clear_column(column);
        if byte == 0 || column >= COLUMNS {
            return;
        }

        let mut mask = 0x80;
        for (row, value) in (0..ROWS).zip(self.rows.iter_mut()) {
            *value |= shift_bit_between_columns(byte, mask, row, column);
            mask >>= 1;
        }
    }

    /// Turn off every pixel in `column`
    pub fn clear_column(&mut self, column: u8) {
        let mask = column_mask(column);
        for value in &mut self.rows {
            *value &= !mask;
        }
    }

    /// Replace the whole buffer
    pub fn replace_all(&mut self, bitmap: Bitmap) {
        self.rows = bitmap;
    }

    /// Turn off every pixel
    pub fn zero_all(&mut self) {
        for row in 0..ROWS {
            self.clear_row(row);
        }
    }
}

impl From<Bitmap> for FrameBuffer {
    fn from(rows: Bitmap) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned() -> FrameBuffer {
        FrameBuffer::from_rows([0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81])
    }

    #[test]
    fn test_new_is_blank() {
        let buffer = FrameBuffer::new();
        assert!(buffer.is_blank());
        assert_eq!(buffer, FrameBuffer::default());
    }

    #[test]
    fn test_set_pixel_uses_msb_for_column_zero() {
        let mut buffer = FrameBuffer::new();
        buffer.set_pixel(0, 0);
        assert_eq!(buffer.row(0), 0x80);

        buffer.set_pixel(7, 6);
        assert_eq!(buffer.row(7), 0x02);
        assert!(buffer.pixel(7, 6));
        assert!(!buffer.pixel(7, 7));
    }

    #[test]
    fn test_set_then_clear_pixel_restores_buffer() {
        let original = patterned();
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let mut buffer = original;
                let was_lit = buffer.pixel(row, column);
                buffer.set_pixel(row, column);
                assert!(buffer.pixel(row, column));
                buffer.clear_pixel(row, column);
                if was_lit {
                    assert!(!buffer.pixel(row, column));
                } else {
                    assert_eq!(buffer, original);
                }
            }
        }
    }

    #[test]
    fn test_set_then_clear_pixel_on_blank_restores_blank() {
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let mut buffer = FrameBuffer::new();
                buffer.set_pixel(row, column);
                buffer.clear_pixel(row, column);
                assert!(buffer.is_blank());
            }
        }
    }

    #[test]
    fn test_set_row_then_clear_row_leaves_other_rows() {
        let original = patterned();
        for row in 0..ROWS {
            let mut buffer = original;
            buffer.set_row(row, 0xFF);
            assert_eq!(buffer.row(row), 0xFF);
            buffer.clear_row(row);
            assert_eq!(buffer.row(row), 0);
            for other in (0..ROWS).filter(|r| *r != row) {
                assert_eq!(buffer.row(other), original.row(other));
            }
        }
    }

    #[test]
    fn test_set_column_full_sets_every_row() {
        for column in 0..COLUMNS {
            let mut buffer = FrameBuffer::new();
            buffer.set_column(column, 0xFF);
            let mask = column_mask(column);
            assert!(buffer.rows().iter().all(|row| *row == mask));

            buffer.clear_column(column);
            assert!(buffer.is_blank());
        }
    }

    #[test]
    fn test_set_column_maps_msb_to_row_zero() {
        let mut buffer = FrameBuffer::new();
        buffer.set_column(2, 0b1010_0001);
        assert!(buffer.pixel(0, 2));
        assert!(!buffer.pixel(1, 2));
        assert!(buffer.pixel(2, 2));
        assert!(!buffer.pixel(6, 2));
        assert!(buffer.pixel(7, 2));
        assert_eq!(buffer.rows().iter().filter(|row| **row != 0).count(), 3);
    }

    #[test]
    fn test_set_column_replaces_previous_column_only() {
        let mut buffer = FrameBuffer::from_rows([0xFF; 8]);
        buffer.set_column(4, 0x0F);
        for row in 0..4 {
            assert_eq!(buffer.row(row), 0xF7);
        }
        for row in 4..8 {
            assert_eq!(buffer.row(row), 0xFF);
        }
    }

    #[test]
    fn test_set_column_zero_is_clear() {
        let mut buffer = FrameBuffer::from_rows([0xFF; 8]);
        buffer.set_column(0, 0);
        assert!(buffer.rows().iter().all(|row| *row == 0x7F));
    }

    #[test]
    fn test_replace_all_and_zero_all() {
        let mut buffer = FrameBuffer::new();
        buffer.replace_all([0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA]);
        assert_eq!(buffer.row(1), 0xAA);
        buffer.zero_all();
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let original = patterned();
        let mut buffer = original;
        buffer.set_pixel(8, 0);
        buffer.set_pixel(0, 8);
        buffer.clear_pixel(9, 1);
        buffer.set_row(8, 0xFF);
        buffer.set_column(8, 0xFF);
        buffer.clear_column(12);
        assert_eq!(buffer, original);
        assert_eq!(buffer.row(8), 0);
        assert!(!buffer.pixel(0, 8));
    }
}
