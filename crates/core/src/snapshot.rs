//! Read-only copy of everything the renderer needs for one frame.

use crate::board::{COLS, ROWS};
use crate::pieces::{mask_cells, Mask};
use crate::tetromino::Tetromino;
use crate::types::{GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute (x, y) board coordinates of every mino.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        mask_cells(&self.mask)
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            x: value.x,
            y: value.y,
        }
    }
}

/// Board cells are encoded as 0 (empty) or `PieceKind::index() + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; COLS]; ROWS],
    /// `None` once the game is over: the blocked spawn is never shown.
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLS]; ROWS],
            active: None,
            status: GameStatus::Running,
            score: 0,
            lines: 0,
            ticks: 0,
        }
    }
}

/// Decode a snapshot board cell.
pub fn piece_from_cell(cell: u8) -> Option<PieceKind> {
    match cell {
        0 => None,
        n => PieceKind::from_index(n as usize - 1),
    }
}
