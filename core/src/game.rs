//! Caller-level orchestration: the Playing/GameOver state machine built on the
//! pure engine operations.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::{legal_directions, resolve, Direction};
use crate::spawn::{spawn, SeededRng, TileRng};
use crate::terminal::has_moves;

/// Whether moves are still being accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Playing,
    GameOver,
}

/// Result of executing a step (move) in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the board changed (and a new tile was spawned).
    pub changed: bool,
    /// Points earned from merges in this move.
    pub reward: u32,
    /// Whether the game is over (no legal moves remaining).
    pub done: bool,
}

/// Board, running score and status, passed by value between engine calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: u32,
    pub status: Status,
}

impl GameState {
    /// Start a game: an empty board seeded with two spawned tiles.
    pub fn new<R: TileRng + ?Sized>(rng: &mut R) -> Self {
        let board = spawn(spawn(Board::empty(), rng), rng);
        Self::from_board(board, 0)
    }

    /// Resume from an existing board and score. The status is derived from
    /// the board.
    pub fn from_board(board: Board, score: u32) -> Self {
        let status = if has_moves(board) {
            Status::Playing
        } else {
            Status::GameOver
        };
        GameState {
            board,
            score,
            status,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Apply one move.
    ///
    /// A rejected move (nothing slides or merges) returns the state unchanged
    /// and spawns nothing. An accepted move adds its merge points to the
    /// score, spawns one tile, then re-checks for remaining moves. A finished
    /// game ignores further moves.
    pub fn step<R: TileRng + ?Sized>(
        self,
        direction: Direction,
        rng: &mut R,
    ) -> (GameState, StepResult) {
        if self.is_over() {
            return (
                self,
                StepResult {
                    changed: false,
                    reward: 0,
                    done: true,
                },
            );
        }

        let moved = resolve(self.board, direction);
        if !moved.changed {
            return (
                self,
                StepResult {
                    changed: false,
                    reward: 0,
                    done: false,
                },
            );
        }

        let next = GameState::from_board(
            spawn(moved.board, rng),
            self.score.saturating_add(moved.score_delta),
        );
        debug!(
            "{} accepted: +{} (score {})",
            direction, moved.score_delta, next.score
        );
        if next.is_over() {
            debug!("no moves left, final score {}", next.score);
        }

        (
            next,
            StepResult {
                changed: true,
                reward: moved.score_delta,
                done: next.is_over(),
            },
        )
    }
}

/// A seeded play session: a [`GameState`] plus the randomness that drives it.
///
/// The same seed and the same sequence of directions always produce the same
/// game.
///
/// ```rust
/// use tile2048_core::{Direction, Game};
///
/// let mut game = Game::new(42);
/// let result = game.step(Direction::Left);
/// println!("Score: {}, Changed: {}", game.score(), result.changed);
/// ```
#[derive(Clone)]
pub struct Game {
    state: GameState,
    rng: SeededRng,
}

impl Game {
    /// Create a new game with the given seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = SeededRng::new(seed);
        let state = GameState::new(&mut rng);
        Game { state, rng }
    }

    /// Reset the game to its initial state with a new seed.
    pub fn reset(&mut self, seed: u64) {
        *self = Game::new(seed);
    }

    /// Execute a move in the given direction.
    pub fn step(&mut self, direction: Direction) -> StepResult {
        let (state, result) = self.state.step(direction, &mut self.rng);
        self.state = state;
        result
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> Board {
        self.state.board
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_done(&self) -> bool {
        self.state.is_over()
    }

    pub fn max_tile(&self) -> u32 {
        self.state.board.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.state.board.empty_count()
    }

    /// Get the legal actions as a boolean array [Up, Down, Left, Right].
    pub fn legal_actions(&self) -> [bool; 4] {
        if self.is_done() {
            return [false; 4];
        }
        legal_directions(self.state.board)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game {{ score: {}, done: {} }}",
            self.score(),
            self.is_done()
        )?;
        write!(f, "{:?}", self.state.board)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score())?;
        write!(f, "{}", self.state.board)
    }
}
