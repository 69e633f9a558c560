//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::CellState;

/// Static help text drawn beside the board.
pub const MENU: [&str; 7] = [
    "BLOCKFALL",
    "",
    "left   Left",
    "right  Right",
    "up     Rotate",
    "down   Down",
    "esc,q  Exit",
];

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const FALLING_FG: Rgb = Rgb::new(80, 200, 240);
const FIXED_FG: Rgb = Rgb::new(60, 90, 220);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board-plus-menu layout for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Where the board frame landed in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board = &snap.board;
        let board_px_w = board.width() as u16 * self.cell_w;
        let board_px_h = board.height() as u16 * self.cell_h;
        let w = board_px_w + 2;
        let h = board_px_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::plain(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        self.draw_border(fb, frame);

        for (y, row) in board.rows().enumerate() {
            for (x, state) in row.iter().enumerate() {
                self.draw_cell(fb, frame, x as u16, y as u16, *state);
            }
        }

        self.draw_menu(fb, viewport, frame);

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, state: CellState) {
        let (ch, style) = match state {
            CellState::Empty => (
                '·',
                CellStyle {
                    dim: true,
                    ..CellStyle::plain(Rgb::new(90, 90, 100), PLAYFIELD_BG)
                },
            ),
            CellState::Falling => (
                '█',
                CellStyle {
                    bold: true,
                    ..CellStyle::plain(FALLING_FG, PLAYFIELD_BG)
                },
            ),
            CellState::Fixed => ('█', CellStyle::plain(FIXED_FG, PLAYFIELD_BG)),
        };
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let title = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        for (i, line) in MENU.iter().enumerate() {
            let style = if i == 0 { title } else { CellStyle::default() };
            fb.put_str(panel_x, frame.y.saturating_add(i as u16), line, style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}
