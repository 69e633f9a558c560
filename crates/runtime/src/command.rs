//! Messages consumed by the game loop.

use crate::input::InputEvent;
use crate::types::GameAction;

/// One unit of work for the game loop. Commands are applied strictly in
/// arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(GameAction),
    /// Gravity step.
    Tick,
    /// The viewport changed size; redraw from scratch.
    Resize,
}

impl From<InputEvent> for Command {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Action(action) => Command::Input(action),
            InputEvent::Resize { .. } => Command::Resize,
        }
    }
}
