//! Piece controller - movement, gravity and rotation of the live piece
//!
//! Every function here is pure: it looks at the proposed placement against
//! the board and returns the placement to commit, or reports that the
//! request is illegal. Committing footprints is the engine's job.
//!
//! Rotation keeps the top-left solid cell of the piece fixed and, if the new
//! orientation overlaps something, walks the piece left one column at a time
//! until it fits or its anchor would leave the board. There is no right kick
//! and no floor kick, so a rotation against the right wall of a full column
//! can fail where a guideline kick table would succeed.

use crate::board::Board;
use crate::geometry::{left_column, top_offset, width};
use crate::shapes::{shape_mask, ShapeMask};
use crate::types::{CellState, PieceKind, Rotation};

/// Where a piece sits: its kind, rotation and the origin of its 4x4 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl Placement {
    /// Spawn placement: the first solid column lands on board column 0 and the
    /// first solid row on board row 0.
    pub fn spawn(kind: PieceKind, rotation: Rotation) -> Self {
        let mask = shape_mask(kind, rotation);
        Self {
            kind,
            rotation,
            x: -(left_column(mask) as i16),
            y: -(top_offset(mask) as i16),
        }
    }

    pub fn mask(&self) -> ShapeMask {
        shape_mask(self.kind, self.rotation)
    }

    /// Board coordinate of the top-left solid cell.
    pub fn anchor(&self) -> (i16, i16) {
        let mask = self.mask();
        (
            self.x + left_column(mask) as i16,
            self.y + top_offset(mask) as i16,
        )
    }

    /// The `y` this placement would have had it never fallen.
    pub fn spawn_y(&self) -> i16 {
        -(top_offset(self.mask()) as i16)
    }

    pub fn shifted(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.has_collision(self.mask(), self.x, self.y)
    }
}

/// The live piece and the footprint last written to the board for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub placement: Placement,
    /// `Falling` while live, `Fixed` once it locks.
    pub state: CellState,
    committed: Option<Placement>,
}

impl ActivePiece {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            state: CellState::Falling,
            committed: None,
        }
    }

    /// Placement whose footprint is currently on the board, if any.
    pub fn committed(&self) -> Option<Placement> {
        self.committed
    }

    pub(crate) fn mark_committed(&mut self) {
        self.committed = Some(self.placement);
    }
}

/// Result of a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// The piece moves down one row to this placement.
    Fell(Placement),
    /// The piece rests on something and must lock.
    Landed,
    /// The piece cannot fall and never left its spawn row.
    Stuck,
}

/// One column left, unless the wall or locked terrain is in the way.
pub fn move_left(current: Placement, board: &Board) -> Option<Placement> {
    let d = left_column(current.mask()) as i16;
    let next = current.shifted(-1, 0);
    if current.x + d - 1 >= 0 && !next.collides(board) {
        Some(next)
    } else {
        None
    }
}

/// One column right, unless the wall or locked terrain is in the way.
pub fn move_right(current: Placement, board: &Board) -> Option<Placement> {
    let mask = current.mask();
    let d = left_column(mask) as i16;
    let w = width(mask) as i16;
    let next = current.shifted(1, 0);
    if current.x + d + w < board.width() as i16 && !next.collides(board) {
        Some(next)
    } else {
        None
    }
}

/// Decide what gravity does to the piece this step.
pub fn gravity(current: Placement, board: &Board) -> Gravity {
    let below = current.shifted(0, 1);
    if !below.collides(board) {
        Gravity::Fell(below)
    } else if current.y == current.spawn_y() {
        Gravity::Stuck
    } else {
        Gravity::Landed
    }
}

/// Rotate clockwise around the top-left solid cell, kicking left on overlap.
///
/// Returns `None` when no kick resolves the overlap; the caller keeps the
/// original placement untouched.
pub fn rotate(current: Placement, board: &Board) -> Option<Placement> {
    let (anchor_x, anchor_y) = current.anchor();
    let rotation = current.rotation.rotate_cw();
    let mask = shape_mask(current.kind, rotation);
    let left = left_column(mask) as i16;

    let mut next = Placement {
        rotation,
        x: anchor_x - left,
        y: anchor_y - top_offset(mask) as i16,
        ..current
    };
    while next.x + left >= 0 && next.collides(board) {
        next.x -= 1;
    }

    if next.collides(board) {
        None
    } else {
        Some(next)
    }
}
