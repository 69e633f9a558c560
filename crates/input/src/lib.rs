//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s and resize
//! notifications. No game state lives here; the runtime forwards whatever
//! this produces to the engine.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_event, InputEvent};
