//! Terminal rendering for the game.
//!
//! Rendering goes through a plain framebuffer: [`GameView`] paints a snapshot
//! into it with no I/O, and [`TerminalRenderer`] flushes the difference from
//! the previous frame to the terminal. Each board cell is two characters
//! wide to offset the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, MENU};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
