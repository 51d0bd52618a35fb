//! The 4x4 board value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Largest tile a 4x4 game can build (2^17). Checked construction rejects
/// anything above it, which keeps every merge and score inside `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// One row (or, through the orientation adapters, one column) of the board.
pub type Line = [u32; SIZE];

/// A 4x4 grid of tile values stored row-major. `0` is an empty cell and every
/// other cell holds a power of two >= 2.
///
/// `Board` is `Copy`: every engine operation takes a board by value and
/// returns a new one, so a board the caller has observed is never mutated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Board(pub(crate) [Line; SIZE]);

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Create an empty board.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Build a board from trusted rows.
    ///
    /// The shape is enforced by the type; tile values are not checked. Use
    /// [`Board::try_from`] for untrusted input.
    pub fn from_rows(rows: [Line; SIZE]) -> Self {
        Board(rows)
    }

    /// Build a board from 16 row-major cell values.
    pub fn from_cells(cells: &[u32]) -> Result<Self, EngineError> {
        if cells.len() != CELLS {
            return Err(EngineError::InvalidLength(cells.len()));
        }
        let mut rows = [[0; SIZE]; SIZE];
        for (i, &value) in cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = value;
        }
        let board = Board(rows);
        board.validate()?;
        Ok(board)
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Line; SIZE] {
        &self.0
    }

    /// Value at `(row, col)`. Panics when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Return a copy of the board with the cell at `(row, col)` replaced.
    pub fn with_cell(mut self, row: usize, col: usize, value: u32) -> Self {
        self.0[row][col] = value;
        self
    }

    /// Row-major copy of all 16 cells.
    pub fn cells(&self) -> [u32; CELLS] {
        let mut out = [0; CELLS];
        for (i, value) in self.0.iter().flatten().enumerate() {
            out[i] = *value;
        }
        out
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(CELLS);
        for (r, row) in self.0.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.0.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Largest tile on the board, `0` when empty.
    pub fn max_tile(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    fn validate(&self) -> Result<(), EngineError> {
        for (row, line) in self.0.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || value > MAX_TILE || !value.is_power_of_two()) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        if rows.len() != SIZE || rows.iter().any(|r| r.len() != SIZE) {
            return Err(EngineError::InvalidBoard {
                rows: rows.len(),
                cols: rows.iter().map(Vec::len).collect(),
            });
        }
        let mut grid = [[0; SIZE]; SIZE];
        for (dst, src) in grid.iter_mut().zip(&rows) {
            dst.copy_from_slice(src);
        }
        let board = Board(grid);
        board.validate()?;
        Ok(board)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.0.iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.0 {
            for &val in row {
                if val == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", val)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.0 {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}
