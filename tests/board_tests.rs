//! Board tests

use term_tetris::core::board::{COLS, ROWS};
use term_tetris::core::Board;
use term_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..ROWS {
        for col in 0..COLS {
            assert!(!board.is_occupied(row, col), "({}, {}) should be empty", row, col);
        }
    }
}

#[test]
#[should_panic(expected = "out of range")]
fn test_board_get_out_of_bounds_panics() {
    Board::new().get(0, COLS);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_board_is_occupied_out_of_bounds_panics() {
    Board::new().is_occupied(ROWS, 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_board_is_row_full_out_of_bounds_panics() {
    Board::new().is_row_full(ROWS);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    board.set(10, 5, Some(PieceKind::T));
    assert_eq!(board.get(10, 5), Some(PieceKind::T));
    assert!(board.is_occupied(10, 5));

    board.set(10, 5, None);
    assert_eq!(board.get(10, 5), None);
    assert!(!board.is_occupied(10, 5));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    board.fill_row(5, PieceKind::T);
    assert!(board.is_row_full(5));

    // Leave one cell empty in row 6
    for col in 0..COLS - 1 {
        board.set(6, col, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
}

#[test]
fn test_board_clear_row() {
    let mut board = Board::new();
    board.fill_row(5, PieceKind::T);
    board.set(3, 0, Some(PieceKind::I));
    board.set(4, 1, Some(PieceKind::O));
    board.set(0, 9, Some(PieceKind::L));

    board.clear_row(5);

    // Row 4 moved to row 5, row 3 to row 4
    assert_eq!(board.get(5, 1), Some(PieceKind::O));
    assert_eq!(board.get(4, 0), Some(PieceKind::I));
    assert_eq!(board.get(3, 0), None);
    // Row 0 moved to row 1 and row 0 is now empty
    assert_eq!(board.get(1, 9), Some(PieceKind::L));
    assert!(board.rows().next().unwrap().iter().all(|c| c.is_none()));
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_board_clear_row_leaves_rows_below_untouched() {
    let mut board = Board::new();
    board.fill_row(10, PieceKind::T);
    board.set(15, 3, Some(PieceKind::Z));
    board.set(19, 7, Some(PieceKind::J));

    board.clear_row(10);

    assert_eq!(board.get(15, 3), Some(PieceKind::Z));
    assert_eq!(board.get(19, 7), Some(PieceKind::J));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_board_clear_full_rows() {
    let mut board = Board::new();
    board.fill_row(18, PieceKind::I);
    board.fill_row(19, PieceKind::O);
    board.set(17, 0, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // The T dropped by two rows
    assert_eq!(board.get(19, 0), Some(PieceKind::T));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_board_clear_multiple_rows_order() {
    let mut board = Board::new();
    board.fill_row(5, PieceKind::T);
    board.fill_row(10, PieceKind::I);
    board.fill_row(15, PieceKind::O);

    board.set(4, 0, Some(PieceKind::J)); // Above row 5
    board.set(9, 0, Some(PieceKind::L)); // Above row 10
    board.set(14, 0, Some(PieceKind::S)); // Above row 15

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[5, 10, 15]);

    // Each marker drops by the number of full rows below it
    assert_eq!(board.get(7, 0), Some(PieceKind::J));
    assert_eq!(board.get(11, 0), Some(PieceKind::L));
    assert_eq!(board.get(15, 0), Some(PieceKind::S));
}

#[test]
fn test_board_clear_four_adjacent_rows() {
    let mut board = Board::new();
    for row in 16..20 {
        board.fill_row(row, PieceKind::I);
    }
    board.set(15, 2, Some(PieceKind::Z));

    assert_eq!(board.clear_full_rows().len(), 4);
    assert_eq!(board.get(19, 2), Some(PieceKind::Z));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_board_reset() {
    let mut board = Board::new();
    board.fill_row(5, PieceKind::T);
    board.set(19, 0, Some(PieceKind::L));

    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_cells_reference() {
    let board = Board::new();
    assert_eq!(board.cells().len(), ROWS * COLS);
    assert_eq!(board.rows().count(), ROWS);
    assert!(board.rows().all(|row| row.len() == COLS));
}
