//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are re-emitted. A size change or an explicit [`TerminalRenderer::invalidate`]
//! forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: FrameBuffer,
    force_full: bool,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: FrameBuffer::new(0, 0),
            force_full: true,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything [`TerminalRenderer::enter`] did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.force_full = true;
    }

    /// Draw `fb`, then swap it with the retained previous frame.
    ///
    /// Callers keep one framebuffer and hand it in every frame; after the
    /// call it holds stale contents that the next render overwrites.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let resized = self.last.width() != fb.width() || self.last.height() != fb.height();
        if self.force_full || resized {
            encode_full_into(fb, &mut self.buf)?;
            self.force_full = false;
        } else {
            encode_diff_into(&self.last, fb, &mut self.buf)?;
        }
        std::mem::swap(&mut self.last, fb);
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..fb.height() {
        encode_run(fb, 0, y, fb.width(), out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both framebuffers must have the same dimensions.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| encode_run(next, x, y, len, out))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_run(fb: &FrameBuffer, x: u16, y: u16, len: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    let mut current: Option<CellStyle> = None;
    for cx in x..x + len {
        let cell = fb.get(cx, y).unwrap_or_default();
        if current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of changed cells, top to
/// bottom.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    f(s, y, x - s)?;
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            f(s, y, next.width() - s)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn frame(text: &str) -> FrameBuffer {
        let mut fb = FrameBuffer::new(text.chars().count() as u16, 1);
        fb.put_str(0, 0, text, CellStyle::default());
        fb
    }

    fn printed(renderer: &TerminalRenderer<Vec<u8>>, from: usize) -> String {
        String::from_utf8_lossy(&renderer.get_ref()[from..]).into_owned()
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(4, 1, Cell { ch: 'Y', style });

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3), (4, 1, 1)]);
    }

    #[test]
    fn repeated_frames_only_emit_changes() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());

        let mut fb = frame("ABC");
        renderer.draw_swap(&mut fb).unwrap();
        assert!(printed(&renderer, 0).contains("ABC"));

        let mark = renderer.get_ref().len();
        let mut fb = frame("ABC");
        renderer.draw_swap(&mut fb).unwrap();
        let again = printed(&renderer, mark);
        assert!(!again.contains('A') && !again.contains('B') && !again.contains('C'));

        let mark = renderer.get_ref().len();
        let mut fb = frame("AXC");
        renderer.draw_swap(&mut fb).unwrap();
        let changed = printed(&renderer, mark);
        assert!(changed.contains('X'));
        assert!(!changed.contains('A') && !changed.contains('C'));
    }

    #[test]
    fn invalidate_and_resize_force_a_full_redraw() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.draw_swap(&mut frame("ABC")).unwrap();

        renderer.invalidate();
        let mark = renderer.get_ref().len();
        renderer.draw_swap(&mut frame("ABC")).unwrap();
        assert!(printed(&renderer, mark).contains("ABC"));

        let mark = renderer.get_ref().len();
        renderer.draw_swap(&mut frame("ABCD")).unwrap();
        assert!(printed(&renderer, mark).contains("ABCD"));
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(3, 3);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains(' '));
    }

    #[test]
    fn full_redraw_prints_every_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("AB"));
    }
}
