//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is empty or holds the kind of
//! the piece that was locked there. Storage is a flat row-major array.
//!
//! Cells are addressed as `(row, col)` with row 0 at the top. Addressing a
//! cell outside the grid is a caller bug and panics; bounds-aware callers
//! (the collision detector) check [`Board::contains`] first.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of rows.
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns.
pub const COLS: usize = BOARD_WIDTH as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = ROWS * COLS;

/// Rows removed by a single line-clear scan, in the order they were cleared.
pub type ClearedRows = ArrayVec<usize, ROWS>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < ROWS && col < COLS,
            "board cell (row {}, col {}) out of range {}x{}",
            row,
            col,
            ROWS,
            COLS
        );
        row * COLS + col
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether signed board coordinates (x = column, y = row) fall inside the grid.
    pub fn contains(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < COLS && y >= 0 && (y as usize) < ROWS
    }

    /// Get the cell at (row, col). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// Write the cell at (row, col). Panics when out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::index(row, col)] = cell;
    }

    /// Whether the in-range cell at (row, col) is filled.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = Self::index(row, 0);
        &self.cells[start..start + COLS]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row_slice(row).iter().all(|cell| cell.is_some())
    }

    /// Remove `row` and shift every row above it down by one.
    ///
    /// Row 0 ends up empty.
    pub fn clear_row(&mut self, row: usize) {
        let end = Self::index(row, 0);
        // copy_within handles the overlap
        self.cells.copy_within(0..end, COLS);
        self.cells[..COLS].fill(None);
    }

    /// Clear every full row.
    ///
    /// Rows are scanned top to bottom. A full row is collapsed and the same
    /// index is examined again before the scan moves on, so any number of
    /// full rows, adjacent or not, is removed in one pass.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut row = 0;
        while row < ROWS {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
                continue;
            }
            row += 1;
        }
        cleared
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Fill every column of `row` with `kind`.
    pub fn fill_row(&mut self, row: usize, kind: PieceKind) {
        let start = Self::index(row, 0);
        self.cells[start..start + COLS].fill(Some(kind));
    }

    /// Number of filled cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLS)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as a `u8` grid: 0 for empty, `kind.index() + 1` otherwise.
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map_or(0, |kind| kind.index() as u8 + 1);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
