//! Error type for the engine's conversion boundaries.
//!
//! The engine operations themselves are total. Errors only arise when
//! untrusted input (nested vectors, flat slices, numeric or textual direction
//! codes) is converted into a [`Board`](crate::Board) or a
//! [`Direction`](crate::Direction).

use thiserror::Error;

/// Errors raised when building engine values from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The value does not name one of the four move directions.
    #[error("invalid direction: {0:?} (expected up, down, left or right)")]
    InvalidDirection(String),

    /// The nested rows do not form a 4x4 grid.
    #[error("invalid board: expected 4x4 grid, got {rows} rows with lengths {cols:?}")]
    InvalidBoard { rows: usize, cols: Vec<usize> },

    /// A flat cell slice does not hold exactly 16 values.
    #[error("invalid board: expected 16 cells, got {0}")]
    InvalidLength(usize),

    /// A cell holds a value that is neither empty nor a power of two in
    /// `2..=MAX_TILE`.
    #[error("invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
