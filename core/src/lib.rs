//! # 2048 Rule Engine
//!
//! Pure board transformations for the 2048 sliding-tile puzzle on a 4x4 grid.
//! All four move directions are computed from one primitive, [`reduce_left`],
//! by way of [`transpose`] and [`reverse`]. Randomness is confined to the tile
//! spawner behind the [`TileRng`] trait, so games are reproducible from a
//! seed and fully scriptable in tests.
//!
//! ## Example
//!
//! ```rust
//! use tile2048_core::{has_moves, resolve, Board, Direction};
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let result = resolve(board, Direction::Left);
//! assert_eq!(result.board.rows()[0], [4, 0, 0, 0]);
//! assert_eq!(result.score_delta, 4);
//! assert!(has_moves(result.board));
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod line;
pub mod moves;
pub mod orient;
pub mod spawn;
pub mod terminal;

pub use board::{Board, Line, CELLS, MAX_TILE, SIZE};
pub use error::EngineError;
pub use game::{Game, GameState, Status, StepResult};
pub use line::{compress, reduce_left};
pub use moves::{legal_directions, resolve, Direction, MoveResult};
pub use orient::{reverse, transpose};
pub use spawn::{spawn, SeededRng, TileRng, TWO_PROBABILITY};
pub use terminal::has_moves;

/// Create an empty board.
pub fn create_empty_board() -> Board {
    Board::empty()
}
