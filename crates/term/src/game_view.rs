//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, with the default 2-column cells:
//!
//! ```text
//! |····················|  SCORE
//! |····················|  0
//! ...
//! +--------------------+
//!
//! GAME OVER
//! Press Enter to exit
//! ```
//!
//! The playfield has side borders and a bottom border but no top border.

use crate::core::snapshot::piece_from_cell;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Gap between the playfield and the side panel.
const PANEL_GAP: u16 = 2;

/// Width reserved for the side panel.
const PANEL_W: u16 = 14;

/// Rows below the bottom border (blank line + two message lines).
const FOOTER_H: u16 = 3;

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const CONFIRM_TEXT: &str = "Press Enter to exit";

const CONTROLS: [&str; 5] = ["a/d  move", "w    rotate", "s    soft drop", "spc  drop", "q    quit"];

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    color: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            color: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Width of the playfield including both side borders.
    pub fn frame_width(&self) -> u16 {
        BOARD_WIDTH as u16 * self.cell_w + 2
    }

    /// Size of the full frame (playfield, panel and footer).
    pub fn frame_size(&self) -> (u16, u16) {
        (
            self.frame_width() + PANEL_GAP + PANEL_W,
            BOARD_HEIGHT as u16 + 1 + FOOTER_H,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let (w, h) = self.frame_size();
        fb.resize(w, h);

        let border = self.style(CellStyle::fg(Rgb::new(200, 200, 200)));
        let right_x = self.frame_width() - 1;
        let floor_y = BOARD_HEIGHT as u16;

        // Side borders.
        for y in 0..floor_y {
            fb.put_char(0, y, '|', border);
            fb.put_char(right_x, y, '|', border);
        }

        // Bottom border.
        fb.put_char(0, floor_y, '+', border);
        for x in 1..right_x {
            fb.put_char(x, floor_y, '-', border);
        }
        fb.put_char(right_x, floor_y, '+', border);

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                match piece_from_cell(cell) {
                    Some(kind) => self.draw_block(fb, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, x as u16, y as u16),
                }
            }
        }

        // Active piece on top of the board.
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap);

        if snap.game_over() {
            let style = self.style(CellStyle::fg(Rgb::new(255, 255, 255)).bold());
            fb.put_str(0, floor_y + 2, GAME_OVER_TEXT, style);
            fb.put_str(0, floor_y + 3, CONFIRM_TEXT, CellStyle::PLAIN);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let (w, h) = self.frame_size();
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(snap, &mut fb);
        fb
    }

    fn style(&self, style: CellStyle) -> CellStyle {
        if self.color {
            style
        } else {
            style.monochrome()
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = self.style(CellStyle::fg(piece_color(kind)).bold());
        self.fill_cell(fb, x, y, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = self.style(CellStyle::fg(Rgb::new(90, 90, 100)).dim());
        self.fill_cell(fb, x, y, '·', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = 1 + x * self.cell_w;
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, y, ch, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let panel_x = self.frame_width() + PANEL_GAP;
        let label = self.style(CellStyle::fg(Rgb::new(220, 220, 220)).bold());
        let value = CellStyle::PLAIN;
        let hint = CellStyle::PLAIN.dim();

        fb.put_str(panel_x, 0, "SCORE", label);
        fb.put_u32(panel_x, 1, snap.score, value);
        fb.put_str(panel_x, 3, "LINES", label);
        fb.put_u32(panel_x, 4, snap.lines, value);

        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(panel_x, 7 + i as u16, line, hint);
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
