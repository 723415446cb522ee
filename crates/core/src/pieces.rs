//! Pieces module - tetromino catalog and the rotation engine
//!
//! Every piece is a 4x4 occupancy mask indexed `[row][col]`. Shapes smaller
//! than 4x4 are padded with empty cells. Rotation is a pure transform of the
//! mask; there are no kick tables, a rotation is either accepted as-is or
//! rejected by the collision check.

use crate::types::PieceKind;

/// Side length of a piece mask.
pub const MASK_SIZE: usize = 4;

/// A 4x4 occupancy grid, `mask[row][col]`.
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];

/// Offset of a single mino relative to the mask origin, as (dx, dy).
pub type MinoOffset = (i8, i8);

/// Build a mask from four row bitfields; bit 3 is column 0.
const fn mask_from_bits(rows: [u8; MASK_SIZE]) -> Mask {
    let mut mask = [[false; MASK_SIZE]; MASK_SIZE];
    let mut row = 0;
    while row < MASK_SIZE {
        let mut col = 0;
        while col < MASK_SIZE {
            mask[row][col] = rows[row] & (0b1000 >> col) != 0;
            col += 1;
        }
        row += 1;
    }
    mask
}

/// Canonical (spawn) orientation of each piece, in `PieceKind` order.
pub const PIECE_MASKS: [Mask; PieceKind::COUNT] = [
    // I
    mask_from_bits([0b0000, 0b1111, 0b0000, 0b0000]),
    // O
    mask_from_bits([0b0110, 0b0110, 0b0000, 0b0000]),
    // T
    mask_from_bits([0b0100, 0b1110, 0b0000, 0b0000]),
    // S
    mask_from_bits([0b0110, 0b1100, 0b0000, 0b0000]),
    // Z
    mask_from_bits([0b1100, 0b0110, 0b0000, 0b0000]),
    // J
    mask_from_bits([0b1000, 0b1110, 0b0000, 0b0000]),
    // L
    mask_from_bits([0b0010, 0b1110, 0b0000, 0b0000]),
];

/// Get the spawn mask for a piece kind
pub fn get_mask(kind: PieceKind) -> Mask {
    PIECE_MASKS[kind.index()]
}

/// Rotate a mask 90° clockwise: `out[col][3 - row] = in[row][col]`.
///
/// Applying it four times yields the input again.
pub fn rotate_cw(mask: &Mask) -> Mask {
    let mut out = [[false; MASK_SIZE]; MASK_SIZE];
    for (row, cells) in mask.iter().enumerate() {
        for (col, &filled) in cells.iter().enumerate() {
            out[col][MASK_SIZE - 1 - row] = filled;
        }
    }
    out
}

/// Iterate the filled cells of a mask as (dx, dy) offsets, row-major.
pub fn mask_cells(mask: &Mask) -> impl Iterator<Item = MinoOffset> + '_ {
    mask.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(col, _)| (col as i8, row as i8))
    })
}

/// Number of filled cells in a mask.
pub fn mask_len(mask: &Mask) -> usize {
    mask.iter().flatten().filter(|&&filled| filled).count()
}
