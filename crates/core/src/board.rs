//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of [`CellState`] stored as a flat,
//! row-major vector. Dimensions are fixed at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Shape footprints are addressed by the origin of their 4x4 box, which may lie
//! partly off the board while a piece spawns or rotates.

use arrayvec::ArrayVec;

use crate::shapes::{mask_cells, ShapeMask};
use crate::types::{CellState, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Row indices removed by one [`Board::clear_full_rows`] pass, top to bottom.
pub type ClearedRows = ArrayVec<u8, { MAX_BOARD_SIZE as usize }>;

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are clamped to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`; use
    /// [`Board::try_new`] to reject them instead.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let height = height.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width as usize * height as usize],
        }
    }

    /// Create a new empty board, or `None` if either dimension is out of range.
    pub fn try_new(width: u8, height: u8) -> Option<Self> {
        let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        (range.contains(&width) && range.contains(&height)).then(|| Self::new(width, height))
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (x, y), `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i16, y: i16, state: CellState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Write `state` into every on-board cell of the footprint.
    ///
    /// Bits that land outside the board are skipped.
    pub fn stamp_footprint(&mut self, mask: ShapeMask, x: i16, y: i16, state: CellState) {
        for (col, row) in mask_cells(mask) {
            self.set(x + col as i16, y + row as i16, state);
        }
    }

    /// Reset the footprint's `Falling` cells to `Empty`.
    ///
    /// `Fixed` cells under the footprint are left untouched.
    pub fn erase_footprint(&mut self, mask: ShapeMask, x: i16, y: i16) {
        for (col, row) in mask_cells(mask) {
            if let Some(idx) = self.index(x + col as i16, y + row as i16) {
                if self.cells[idx] == CellState::Falling {
                    self.cells[idx] = CellState::Empty;
                }
            }
        }
    }

    /// True if any footprint cell is off the board or already `Fixed`.
    ///
    /// `Falling` cells never block.
    pub fn has_collision(&self, mask: ShapeMask, x: i16, y: i16) -> bool {
        mask_cells(mask).iter().any(|&(col, row)| {
            match self.get(x + col as i16, y + row as i16) {
                Some(state) => state.is_fixed(),
                None => true,
            }
        })
    }

    /// A row is full only when every cell in it is `Fixed`.
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|cells| cells.iter().all(|cell| cell.is_fixed()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Remove row `y`, shifting every row above it down by one and emptying
    /// the top row.
    fn collapse_row(&mut self, y: usize) {
        let width = self.width as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(CellState::Empty);
    }

    /// Scan top to bottom and remove every full row.
    ///
    /// After a removal the same index is checked again, since it now holds the
    /// row that used to sit above it. Returns the removed row indices.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = 0;
        while y < self.height as usize {
            if self.is_row_full(y) {
                self.collapse_row(y);
                // bounded by height, which is at most MAX_BOARD_SIZE
                let _ = cleared.try_push(y as u8);
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Count cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Build a board from text rows: `#` is `Fixed`, `*` is `Falling`,
    /// anything else is `Empty`.
    ///
    /// Missing rows are added empty at the top, so a short picture describes
    /// the bottom of the board.
    ///
    /// ```
    /// use blockfall_core::Board;
    /// use blockfall_core::types::CellState;
    ///
    /// let board = Board::from_rows(4, 4, &["#..#", "####"]);
    /// assert_eq!(board.get(0, 2), Some(CellState::Fixed));
    /// assert_eq!(board.get(1, 2), Some(CellState::Empty));
    /// assert!(board.is_row_full(3));
    /// ```
    pub fn from_rows(width: u8, height: u8, rows: &[&str]) -> Self {
        let mut board = Self::new(width, height);
        let skip = (height as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().take(height as usize).enumerate() {
            for (x, ch) in line.chars().take(width as usize).enumerate() {
                let state = match ch {
                    '#' => CellState::Fixed,
                    '*' => CellState::Falling,
                    _ => CellState::Empty,
                };
                board.set(x as i16, (skip + i) as i16, state);
            }
        }
        board
    }
}
