//! Terminal frontend: snapshots in, diffed escape sequences out.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::runtime::Frontend;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Used when the terminal cannot report its size.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    entered: bool,
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl TerminalFrontend {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            entered: false,
        }
    }

    /// Take over the terminal.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.entered = true;
        Ok(())
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.renderer.exit()
    }
}

impl Frontend for TerminalFrontend {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn resize(&mut self) -> Result<()> {
        self.renderer.invalidate();
        Ok(())
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
