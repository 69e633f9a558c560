//! Bounding-box helpers for shape masks.
//!
//! These are pure and cheap enough to recompute on every move and rotation;
//! nothing is cached.

use crate::shapes::{is_set, ShapeMask};
use crate::types::SHAPE_BOX;

/// Number of empty rows above the first occupied row (0..=3).
///
/// An empty mask reports 0.
#[inline]
pub fn top_offset(mask: ShapeMask) -> u8 {
    (0..SHAPE_BOX)
        .find(|&row| (mask >> ((SHAPE_BOX - 1 - row) * SHAPE_BOX)) & 0xF != 0)
        .unwrap_or(0)
}

/// Column of the leftmost occupied cell (0..=3), or 4 for an empty mask.
#[inline]
pub fn left_column(mask: ShapeMask) -> u8 {
    (0..SHAPE_BOX)
        .find(|&col| (0..SHAPE_BOX).any(|row| is_set(mask, col, row)))
        .unwrap_or(SHAPE_BOX)
}

/// Column of the rightmost occupied cell, `None` for an empty mask.
#[inline]
pub fn right_column(mask: ShapeMask) -> Option<u8> {
    (0..SHAPE_BOX)
        .rev()
        .find(|&col| (0..SHAPE_BOX).any(|row| is_set(mask, col, row)))
}

/// Horizontal extent: rightmost minus leftmost occupied column, plus one.
///
/// An empty mask has width 0.
#[inline]
pub fn width(mask: ShapeMask) -> u8 {
    match right_column(mask) {
        Some(right) => right - left_column(mask) + 1,
        None => 0,
    }
}
