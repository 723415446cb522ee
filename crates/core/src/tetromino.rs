//! The active falling piece.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::{get_mask, mask_cells, rotate_cw, Mask};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
///
/// `x`/`y` locate the top-left corner of the 4x4 mask in board coordinates
/// (x = column, y = row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a tetromino in spawn orientation at an arbitrary origin.
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            mask: get_mask(kind),
            x,
            y,
        }
    }

    /// Absolute (x, y) board coordinates of every mino.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        mask_cells(&self.mask)
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Whether the current placement is illegal on `board`.
    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.mask, self.x, self.y, board)
    }

    /// Shift the origin by (dx, dy) if the result is legal.
    ///
    /// Returns false and leaves the piece untouched otherwise.
    pub fn move_by(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        let (Some(x), Some(y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return false;
        };
        if collides(&self.mask, x, y, board) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Rotate clockwise in place if the rotated mask fits at the same origin.
    ///
    /// Returns false and keeps the previous mask otherwise.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = rotate_cw(&self.mask);
        if collides(&rotated, self.x, self.y, board) {
            return false;
        }
        self.mask = rotated;
        true
    }

    /// Write every mino into `board`.
    ///
    /// Panics if the placement is out of range or overlaps a filled cell;
    /// the controller only locks legal placements.
    pub fn lock_into(&self, board: &mut Board) {
        assert!(
            !self.collides(board),
            "illegal lock of {:?} at ({}, {})",
            self.kind,
            self.x,
            self.y
        );
        for (x, y) in self.cells() {
            board.set(y as usize, x as usize, Some(self.kind));
        }
    }
}
