//! Move Resolver: reduces all four directions to [`reduce_left`] through the
//! orientation adapters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::EngineError;
use crate::line::reduce_left;
use crate::orient::{reverse, transpose};

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions, in numeric-code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Numeric code of this direction (0=Up, 1=Down, 2=Left, 3=Right).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as accepted by `str::parse`.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(value.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of sliding a board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after sliding and merging (no tile spawned).
    pub board: Board,
    /// Points earned from merges in this move.
    pub score_delta: u32,
    /// Whether any cell differs from the input board.
    pub changed: bool,
}

/// Slide and merge `board` towards `direction`.
///
/// Pure: the input board is not modified.
pub fn resolve(board: Board, direction: Direction) -> MoveResult {
    match direction {
        Direction::Left => resolve_left(board),
        Direction::Right => resolve_right(board),
        Direction::Up => {
            let result = resolve_left(transpose(board));
            MoveResult {
                board: transpose(result.board),
                ..result
            }
        }
        Direction::Down => {
            let result = resolve_right(transpose(board));
            MoveResult {
                board: transpose(result.board),
                ..result
            }
        }
    }
}

/// Which directions would change the board, in [`Direction::ALL`] order.
pub fn legal_directions(board: Board) -> [bool; 4] {
    Direction::ALL.map(|dir| resolve(board, dir).changed)
}

fn resolve_left(board: Board) -> MoveResult {
    let mut rows = board.0;
    let mut score_delta = 0;
    let mut changed = false;
    for row in rows.iter_mut() {
        let (reduced, reward) = reduce_left(*row);
        changed |= reduced != *row;
        score_delta += reward;
        *row = reduced;
    }
    MoveResult {
        board: Board(rows),
        score_delta,
        changed,
    }
}

fn resolve_right(board: Board) -> MoveResult {
    let result = resolve_left(reverse(board));
    MoveResult {
        board: reverse(result.board),
        ..result
    }
}
