use crate::board::Board;
use crate::controller::Placement;
use crate::types::CellState;

/// Read-only copy of the board grid for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    width: u8,
    height: u8,
    cells: Vec<CellState>,
}

impl BoardSnapshot {
    /// Copy `board` into this snapshot, reusing the existing allocation.
    pub fn copy_from(&mut self, board: &Board) {
        self.width = board.width();
        self.height = board.height();
        self.cells.clear();
        self.cells.extend_from_slice(board.cells());
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.cells.get(y * self.width as usize + x).copied()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let mut snap = Self::default();
        snap.copy_from(board);
        snap
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub active: Option<Placement>,
    pub game_over: bool,
}
