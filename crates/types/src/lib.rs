//! Core types module - shared data structures and constants
//!
//! Plain data shared by the engine, the input mapper, the renderer and the
//! runtime. Nothing here depends on I/O, which keeps every type usable from
//! tests and headless drivers.
//!
//! # Board Dimensions
//!
//! The classic playfield is the default, but the engine accepts any size
//! within the bounds below:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 10 | Columns (indexed 0..width) |
//! | `DEFAULT_BOARD_HEIGHT` | 20 | Rows (indexed 0..height, top to bottom) |
//! | `MIN_BOARD_SIZE` | 4 | Smallest width/height (one shape box) |
//! | `MAX_BOARD_SIZE` | 64 | Largest width/height |
//!
//! # Timing
//!
//! Gravity runs on a fixed period, `DEFAULT_TICK_MS` (one row per second).
//! There is no level-based speed-up.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{CellState, GameAction, PieceKind, Rotation};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Rotation::from_index(6), Rotation::South);
//!
//! assert_eq!(GameAction::Rotate, GameAction::Rotate);
//! assert_eq!(CellState::default(), CellState::Empty);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board width or height.
pub const MIN_BOARD_SIZE: u8 = 4;

/// Largest accepted board width or height.
pub const MAX_BOARD_SIZE: u8 = 64;

/// Default gravity period in milliseconds (one row per second)
pub const DEFAULT_TICK_MS: u32 = 1000;

/// Side length of the square box every shape mask is drawn in.
pub const SHAPE_BOX: u8 = 4;

/// The seven piece kinds, in shape table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in shape table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Row of this kind in the shape table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at `index`, wrapping modulo 7.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(2), PieceKind::T);
    /// assert_eq!(PieceKind::from_index(7), PieceKind::I);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Parse piece kind from string (case-insensitive, spawn scripts)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Rotation variant of a shape, one per column of the shape table.
///
/// The cycle goes North → East → South → West → North. Only clockwise
/// rotation is exposed to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Column of this rotation in the shape table (always in `0..4`).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation at `index`, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Parse rotation from string (spawn scripts)
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }
}

/// State of a single board cell.
///
/// `Falling` marks cells stamped by the live piece; only `Fixed` cells take
/// part in collision and full-row detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Falling,
    Fixed,
}

impl CellState {
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    pub fn is_fixed(self) -> bool {
        self == CellState::Fixed
    }
}

/// Player commands accepted by the engine.
///
/// Used by both the keyboard mapper and scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// One gravity step on demand; locks the piece when it cannot fall
    SoftDrop,
    /// Rotate piece 90° clockwise, kicking left if needed
    Rotate,
    /// Cooperative shutdown; accepted even after game over
    Quit,
}
