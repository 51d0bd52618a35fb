//! Orientation Adapters.
//!
//! Moving right is moving left on a mirrored board; moving up is moving left
//! on a transposed board. Both adapters are their own inverse.

use crate::board::{Board, SIZE};

/// Swap rows and columns: cell `(r, c)` becomes cell `(c, r)`.
pub fn transpose(board: Board) -> Board {
    let mut out = [[0; SIZE]; SIZE];
    for (r, row) in board.0.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            out[c][r] = value;
        }
    }
    Board(out)
}

/// Mirror each row left-to-right. Row membership is unchanged.
pub fn reverse(board: Board) -> Board {
    let mut out = board.0;
    for row in out.iter_mut() {
        row.reverse();
    }
    Board(out)
}
