//! Collision detection for candidate piece placements.

use crate::board::Board;
use crate::pieces::{mask_cells, Mask};

/// Whether placing `mask` with its origin at (x, y) is illegal.
///
/// A set cell collides when its target column is outside the board, its
/// target row is below the floor or above the top edge, or the target cell is
/// already occupied. Pieces spawn at y = 0 and only ever move down, so the
/// top-edge case cannot arise in play; it is rejected rather than indexed.
/// Coordinates that overflow `i8` are off the board and collide too.
pub fn collides(mask: &Mask, x: i8, y: i8, board: &Board) -> bool {
    mask_cells(mask).any(|(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
        (Some(bx), Some(by)) => {
            !Board::contains(bx, by) || board.is_occupied(by as usize, bx as usize)
        }
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_mask;
    use crate::types::PieceKind;

    #[test]
    fn empty_board_spawn_is_legal() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&get_mask(kind), 3, 0, &board), "{:?}", kind);
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let i = get_mask(PieceKind::I);
        // I occupies columns 0..=3 of mask row 1.
        assert!(!collides(&i, 0, 0, &board));
        assert!(collides(&i, -1, 0, &board));
        assert!(!collides(&i, 6, 0, &board));
        assert!(collides(&i, 7, 0, &board));
        assert!(!collides(&i, 0, 18, &board));
        assert!(collides(&i, 0, 19, &board));
    }

    #[test]
    fn empty_mask_padding_may_hang_outside() {
        let board = Board::new();
        let o = get_mask(PieceKind::O);
        // O fills mask columns 1..=2, so column 0 of the box can sit at x = -1.
        assert!(!collides(&o, -1, 0, &board));
        assert!(collides(&o, -2, 0, &board));
    }

    #[test]
    fn occupied_cell_collides() {
        let mut board = Board::new();
        board.set(1, 4, Some(PieceKind::Z));
        assert!(collides(&get_mask(PieceKind::T), 3, 0, &board));
        assert!(!collides(&get_mask(PieceKind::T), 5, 0, &board));
    }

    #[test]
    fn negative_row_collides() {
        let board = Board::new();
        assert!(collides(&get_mask(PieceKind::O), 3, -1, &board));
        // The I mask's top row is empty, so y = -1 still places it on row 0.
        assert!(!collides(&get_mask(PieceKind::I), 3, -1, &board));
    }

    #[test]
    fn extreme_origins_collide_without_overflow() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            let mask = get_mask(kind);
            assert!(collides(&mask, i8::MAX, 0, &board));
            assert!(collides(&mask, 0, i8::MAX, &board));
            assert!(collides(&mask, i8::MIN, i8::MIN, &board));
        }
    }
}
