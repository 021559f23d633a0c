//! Wire frames for the HT16K33
//!
//! Builds the exact byte sequences written to the chip for every driver
//! operation. Nothing here touches the bus.
//!
//! Two encodings exist for display RAM:
//!
//! - **Row frame**: `[row address, row data]`, used when a single row changes.
//! - **Full frame**: RAM pointer `0x00` followed by all 15 remaining bytes of
//!   display RAM, with row data at odd positions. Used whenever a change can
//!   touch more than one row.
//!
//! Row data is bit-reversed on the way out, see [`reverse_bits`].
//!
//! ## Example
//!
//! ```
//! use matrix8x8::{protocol, BlinkRate, FrameBuffer};
//!
//! assert_eq!(protocol::power_on(BlinkRate::Medium), [0x85]);
//!
//! let mut buffer = FrameBuffer::new();
//! buffer.set_pixel(7, 6);
//! assert_eq!(protocol::row_frame(&buffer, 7), Some([0x0E, 0x40]));
//! ```

use crate::bits::reverse_bits;
use crate::buffer::FrameBuffer;
use crate::command::{
    BLINK_SHIFT, DIMMING_SET, DISPLAY_OFF, DISPLAY_ON, DISPLAY_RAM_SIZE, DISPLAY_RAM_START,
    DISPLAY_SETUP, OSCILLATOR_ON, ROW_ADDRESSES,
};
use crate::config::BlinkRate;

/// Length of a full-buffer frame in bytes
pub const FULL_FRAME_LEN: usize = DISPLAY_RAM_SIZE;

/// Length of a single-row frame in bytes
pub const ROW_FRAME_LEN: usize = 2;

/// Oscillator enable frame
pub const fn oscillator_on() -> [u8; 1] {
    [OSCILLATOR_ON]
}

/// Display-on frame carrying the blink rate
pub const fn power_on(blink_rate: BlinkRate) -> [u8; 1] {
    [DISPLAY_SETUP | DISPLAY_ON | (blink_rate.raw() << BLINK_SHIFT)]
}

/// Display-off frame
pub const fn power_off() -> [u8; 1] {
    [DISPLAY_OFF]
}

/// Dimming frame
///
/// `level` must already be validated to 0..=15; higher bits are dropped.
pub const fn brightness(level: u8) -> [u8; 1] {
    [DIMMING_SET | (level & 0x0F)]
}

/// Frame updating a single row of display RAM
///
/// Returns `None` when `row` is outside the matrix.
pub fn row_frame(buffer: &FrameBuffer, row: u8) -> Option<[u8; ROW_FRAME_LEN]> {
    let address = ROW_ADDRESSES.get(row as usize)?;
    Some([*address, reverse_bits(buffer.row(row))])
}

/// Frame rewriting all of display RAM from register 0
///
/// Byte 0 is the RAM pointer, row `i` goes to byte `2 * i + 1` and the
/// remaining even bytes stay zero.
pub fn full_frame(buffer: &FrameBuffer) -> [u8; FULL_FRAME_LEN] {
    let mut frame = [0u8; FULL_FRAME_LEN];
    frame[0] = DISPLAY_RAM_START;
    for (slot, row) in frame.iter_mut().skip(1).step_by(2).zip(buffer.rows()) {
        *slot = reverse_bits(*row);
    }
    frame
}
