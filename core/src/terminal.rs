//! Terminal Detector.

use crate::board::{Board, SIZE};

/// Whether any move can still change the board.
///
/// True as soon as an empty cell, or a cell equal to its right or lower
/// neighbour, is found. False means the game is over.
pub fn has_moves(board: Board) -> bool {
    let cells = &board.0;
    for r in 0..SIZE {
        for c in 0..SIZE {
            let value = cells[r][c];
            if value == 0 {
                return true;
            }
            if c + 1 < SIZE && value == cells[r][c + 1] {
                return true;
            }
            if r + 1 < SIZE && value == cells[r + 1][c] {
                return true;
            }
        }
    }
    false
}
