//! Coordinate rotation utilities
//!
//! The backpack can be mounted in any of four orientations. This module maps
//! logical (x, y) coordinates, as seen by the viewer, onto the native
//! (row, column) grid of the frame buffer.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation, x is the column and y the row
//! - **Rotate90**: 90° clockwise
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use matrix8x8::{rotation::apply_rotation, Rotation};
//!
//! // Native orientation: (x, y) = (6, 7) is row 7, column 6
//! assert_eq!(apply_rotation(6, 7, Rotation::Rotate0), Some((7, 6)));
//!
//! // Upside down, the origin sits in the bottom-right corner
//! assert_eq!(apply_rotation(0, 0, Rotation::Rotate180), Some((7, 7)));
//! ```

use crate::bits::COLUMNS;
use crate::buffer::ROWS;
use crate::config::Rotation;

/// Apply rotation transformation to get the native (row, column)
///
/// # Arguments
///
/// * `x` - Logical X coordinate, 0 to 7
/// * `y` - Logical Y coordinate, 0 to 7
/// * `rotation` - Rotation mode
///
/// # Returns
///
/// `Some((row, column))` in frame buffer coordinates, or `None` when the
/// logical coordinate lies outside the matrix.
pub fn apply_rotation(x: u8, y: u8, rotation: Rotation) -> Option<(u8, u8)> {
    if x >= COLUMNS || y >= ROWS {
        return None;
    }
    let last = ROWS - 1;
    let mapped = match rotation {
        Rotation::Rotate0 => (y, x),
        Rotation::Rotate90 => (x, last - y),
        Rotation::Rotate180 => (last - y, last - x),
        Rotation::Rotate270 => (last - x, y),
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate0() {
        assert_eq!(apply_rotation(0, 0, Rotation::Rotate0), Some((0, 0)));
        assert_eq!(apply_rotation(7, 0, Rotation::Rotate0), Some((0, 7)));
        assert_eq!(apply_rotation(0, 7, Rotation::Rotate0), Some((7, 0)));
    }

    #[test]
    fn test_rotate90() {
        // Top-left of the viewer is the native top-right
        assert_eq!(apply_rotation(0, 0, Rotation::Rotate90), Some((0, 7)));
        assert_eq!(apply_rotation(7, 0, Rotation::Rotate90), Some((7, 7)));
        assert_eq!(apply_rotation(0, 7, Rotation::Rotate90), Some((0, 0)));
    }

    #[test]
    fn test_rotate180() {
        assert_eq!(apply_rotation(0, 0, Rotation::Rotate180), Some((7, 7)));
        assert_eq!(apply_rotation(7, 7, Rotation::Rotate180), Some((0, 0)));
        assert_eq!(apply_rotation(1, 0, Rotation::Rotate180), Some((7, 6)));
    }

    #[test]
    fn test_rotate270() {
        // Top-left of the viewer is the native bottom-left
        assert_eq!(apply_rotation(0, 0, Rotation::Rotate270), Some((7, 0)));
        assert_eq!(apply_rotation(0, 7, Rotation::Rotate270), Some((7, 7)));
        assert_eq!(apply_rotation(7, 0, Rotation::Rotate270), Some((0, 0)));
    }

    #[test]
    fn test_every_rotation_is_a_bijection() {
        for rotation in [
            Rotation::Rotate0,
            Rotation::Rotate90,
            Rotation::Rotate180,
            Rotation::Rotate270,
        ] {
            let mut seen = [[false; 8]; 8];
            for y in 0..ROWS {
                for x in 0..COLUMNS {
                    let (row, column) = apply_rotation(x, y, rotation).unwrap();
                    assert!(!seen[row as usize][column as usize]);
                    seen[row as usize][column as usize] = true;
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(apply_rotation(8, 0, Rotation::Rotate0), None);
        assert_eq!(apply_rotation(0, 8, Rotation::Rotate90), None);
    }
}
