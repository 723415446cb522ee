//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously presented one and only changed
//! runs are redrawn. A write that fails transiently is retried a few times;
//! if it still fails the frame is skipped and the next one is a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

/// Extra attempts after a transient write failure before a frame is skipped.
pub const RENDER_RETRY_LIMIT: usize = 3;

/// Something that can show a finished frame.
pub trait FrameSink {
    /// Take over the output before the first frame.
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    /// Give the output back. Called even when `enter` failed part way.
    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

/// Keeps every presented frame in memory. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<FrameBuffer>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }
}

impl FrameSink for MemorySink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    fn write_restore_sequence(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        // Raw mode is released even if the escape sequences cannot be written.
        let restored = self.write_restore_sequence();
        terminal::disable_raw_mode()?;
        restored
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }

        if write_with_retry(&mut self.stdout, &self.buf, RENDER_RETRY_LIMIT)? {
            match &mut self.last {
                Some(prev) => prev.clone_from(fb),
                None => self.last = Some(fb.clone()),
            }
        } else {
            // A partial write leaves the screen unknown.
            self.invalidate();
        }
        Ok(())
    }
}

/// Write and flush `bytes`, retrying `WouldBlock`/`Interrupted` up to `retries` times.
///
/// Returns `Ok(false)` when the frame had to be skipped; other I/O errors propagate.
pub fn write_with_retry<W: Write>(out: &mut W, bytes: &[u8], retries: usize) -> Result<bool> {
    for _ in 0..=retries {
        match out.write_all(bytes).and_then(|()| out.flush()) {
            Ok(()) => return Ok(true),
            Err(e) if is_transient(&e) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(false)
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.fg {
        Some(rgb) => out.queue(SetForegroundColor(Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }))?,
        None => out.queue(SetForegroundColor(Color::Reset))?,
    };
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

/// Changed horizontal runs as (x, y, len), row by row.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    runs.push((start, y, x - start));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.push((start, y, next.width() - start));
        }
    }
    runs
}
