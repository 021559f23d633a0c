//! Bit manipulation helpers
//!
//! The frame buffer stores one byte per row with column 0 in the most
//! significant bit. The HT16K33 backpack wires its column outputs in the
//! opposite order, so every row byte is bit-reversed on its way to the chip.
//!
//! ## Example
//!
//! ```
//! use matrix8x8::bits::{column_mask, reverse_bits};
//!
//! // Column 0 is the MSB, column 7 the LSB
//! assert_eq!(column_mask(0), 0x80);
//! assert_eq!(column_mask(7), 0x01);
//!
//! // Column 6 lit in the buffer lands on chip output 1
//! assert_eq!(reverse_bits(0x02), 0x40);
//! ```

/// Number of columns (bits) per row
pub const COLUMNS: u8 = 8;

/// Reverse the bit order of a byte
///
/// Bit 0 swaps with bit 7, bit 1 with bit 6, and so on. Applying it twice
/// yields the original byte.
#[inline]
pub const fn reverse_bits(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// Single-bit mask selecting `column` within a row byte
///
/// Returns `0x80 >> column`. Columns outside `0..8` select nothing and yield
/// `0x00`.
#[inline]
pub const fn column_mask(column: u8) -> u8 {
    if column < COLUMNS { 0x80 >> column } else { 0 }
}

/// Move the bit selected by `mask` from `from_column` to `to_column`
///
/// Isolates `byte & mask`, which is expected to sit at `from_column`, and
/// shifts it right when the target lies further right (higher column index)
/// and left otherwise. The result is meant to be OR-ed into a row byte.
///
/// # Arguments
///
/// * `byte` - Source pattern
/// * `mask` - Single-bit mask for `from_column`
/// * `from_column` - Column the selected bit currently occupies, 0 to 7
/// * `to_column` - Column the bit should end up in, 0 to 7
///
/// # Example
///
/// ```
/// use matrix8x8::bits::shift_bit_between_columns;
///
/// // MSB (column 0) moved to column 3
/// assert_eq!(shift_bit_between_columns(0xFF, 0x80, 0, 3), 0x10);
///
/// // Column 6 moved to column 2
/// assert_eq!(shift_bit_between_columns(0x02, 0x02, 6, 2), 0x20);
/// ```
#[inline]
pub const fn shift_bit_between_columns(byte: u8, mask: u8, from_column: u8, to_column: u8) -> u8 {
    let bit = byte & mask;
    if to_column >= from_column {
        bit >> (to_column - from_column)
    } else {
        bit << (from_column - to_column)
    }
}
