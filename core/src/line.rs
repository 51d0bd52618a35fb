//! Line Reducer: the single-row primitive every move is built from.

use crate::board::{Line, SIZE};

/// Pack the non-zero values of `line` towards index 0, preserving their order.
pub fn compress(line: Line) -> Line {
    let mut out = [0; SIZE];
    let mut write_idx = 0;
    for value in line {
        if value != 0 {
            out[write_idx] = value;
            write_idx += 1;
        }
    }
    out
}

/// Slide and merge one line towards index 0.
///
/// Returns the reduced line and the points earned, where each merge of two
/// tiles of value `v` contributes `2v`.
///
/// Algorithm:
/// 1. Compress: move all non-zero values to the front
/// 2. Merge: combine adjacent equal values, left to right, once each
/// 3. Compress again
pub fn reduce_left(line: Line) -> (Line, u32) {
    let mut line = compress(line);

    let mut reward = 0;
    for i in 0..SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            reward += line[i];
            // The zero left behind stops the new tile merging again at i + 1.
            line[i + 1] = 0;
        }
    }

    (compress(line), reward)
}
