//! Shape table - every piece kind and rotation as a 16-bit mask
//!
//! Each mask covers a 4x4 box. The most significant bit is the top-left cell
//! and bits run left to right, then top to bottom: bit `15 - i` is set when
//! cell `(i % 4, i / 4)` is occupied.
//!
//! ```text
//! 0x4E00 (T, East)     0x2222 (I, East)
//! . # . .              . . # .
//! # # # .              . . # .
//! . . . .              . . # .
//! . . . .              . . # .
//! ```
//!
//! I, S and Z repeat two masks; O repeats one. The duplicates keep the table
//! rectangular so every kind cycles through four rotation slots.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, SHAPE_BOX};

/// A shape rotation encoded over a 4x4 box.
pub type ShapeMask = u16;

/// Offset of one occupied cell inside the 4x4 box, as `(column, row)`.
pub type MaskCell = (u8, u8);

/// Masks indexed by `[kind][rotation]`.
pub const SHAPES: [[ShapeMask; 4]; 7] = [
    // I
    [0x0F00, 0x2222, 0x0F00, 0x2222],
    // O
    [0x6600, 0x6600, 0x6600, 0x6600],
    // T
    [0x4C40, 0x4E00, 0xC880, 0xE400],
    // S
    [0x06C0, 0x8C40, 0x6C00, 0x4620],
    // Z
    [0x0C60, 0x4C80, 0xC600, 0x2640],
    // J
    [0x44C0, 0x8E00, 0xE880, 0xC440],
    // L
    [0x4460, 0x0E80, 0xC440, 0x2E00],
];

/// Look up the mask for a kind in a given rotation.
#[inline]
pub fn shape_mask(kind: PieceKind, rotation: Rotation) -> ShapeMask {
    SHAPES[kind.index()][rotation.index()]
}

/// Whether the cell at `(col, row)` of the box is occupied.
#[inline]
pub fn is_set(mask: ShapeMask, col: u8, row: u8) -> bool {
    debug_assert!(col < SHAPE_BOX && row < SHAPE_BOX);
    mask & (0x8000 >> (row * SHAPE_BOX + col)) != 0
}

/// Occupied cells of a mask in reading order.
///
/// This is stack-only and does not allocate.
pub fn mask_cells(mask: ShapeMask) -> ArrayVec<MaskCell, 16> {
    let mut out = ArrayVec::new();
    for row in 0..SHAPE_BOX {
        for col in 0..SHAPE_BOX {
            if is_set(mask, col, row) {
                out.push((col, row));
            }
        }
    }
    out
}
