//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal,
//! no clock, no threads. A driver feeds it commands and ticks and reads
//! snapshots back.
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7 x 4 table of 16-bit shape masks
//! - [`geometry`]: top offset, leftmost column and width of a mask
//! - [`board`]: fixed-size grid with footprint stamping, collision and row clearing
//! - [`controller`]: move, gravity and rotate-with-left-kick for the live piece
//! - [`engine`]: the orchestrator that commits piece changes to the board
//! - [`spawn`] / [`rng`]: deterministic spawn selection
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Rules
//!
//! - Only `Fixed` cells block movement; the live piece is stamped as `Falling`
//!   and never collides with itself.
//! - A row clears only when every cell is `Fixed`, so a row is never removed
//!   while the live piece still overlaps it.
//! - A piece that cannot fall before it has left its spawn row ends the game.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_core::types::{GameAction, CellState};
//!
//! let mut game = GameEngine::new(10, 20, 12345);
//! game.handle_input(GameAction::MoveRight);
//! game.handle_input(GameAction::Rotate);
//! game.tick();
//!
//! let snap = game.board_snapshot();
//! let falling = snap.rows().flatten().filter(|c| **c == CellState::Falling).count();
//! assert_eq!(falling, 4);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod controller;
pub mod engine;
pub mod geometry;
pub mod rng;
pub mod shapes;
pub mod snapshot;
pub mod spawn;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use controller::{ActivePiece, Gravity, Placement};
pub use engine::{GameEngine, Outcome};
pub use geometry::{left_column, top_offset, width};
pub use rng::{PieceQueue, SimpleRng};
pub use shapes::{mask_cells, shape_mask, ShapeMask, SHAPES};
pub use snapshot::{BoardSnapshot, GameSnapshot};
pub use spawn::{BagSpawner, ScriptedSpawner, SpawnSelector, UniformSpawner};
