//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the terminal
//! frontend that joins the game loop to the renderer.

pub mod frontend;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_runtime as runtime;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use frontend::TerminalFrontend;
