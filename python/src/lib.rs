//! # 2048 Python Bindings
//!
//! Python bindings to the 2048 rule engine using PyO3. Exposes a seeded `Game`
//! session class and the stateless engine functions over nested-list boards.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};
use tile2048_core::{self as engine, Board, Direction, EngineError, Game as CoreGame, StepResult};

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_direction(direction: u8) -> PyResult<Direction> {
    Direction::try_from(direction).map_err(to_py_err)
}

fn parse_board(rows: Vec<Vec<u32>>) -> PyResult<Board> {
    Board::try_from(rows).map_err(to_py_err)
}

/// Python wrapper for a seeded 2048 session.
///
/// Usage:
///     from tile2048 import Game
///     game = Game(seed=42)
///     result = game.step(2)  # Left
///     print(result)  # {'board': [...], 'score': 0, 'reward': 0, 'changed': True, 'done': False}
#[pyclass]
pub struct Game {
    inner: CoreGame,
}

#[pymethods]
impl Game {
    /// Create a new game with the given seed.
    #[new]
    fn new(seed: u64) -> Self {
        Game {
            inner: CoreGame::new(seed),
        }
    }

    /// Reset the game to initial state with a new seed.
    fn reset(&mut self, seed: u64) {
        self.inner.reset(seed);
    }

    /// Execute a move in the given direction.
    ///
    /// Args:
    ///     direction: 0=Up, 1=Down, 2=Left, 3=Right
    ///
    /// Returns:
    ///     dict with keys: board, score, reward, changed, done
    ///
    /// Raises:
    ///     ValueError: for any other direction code
    fn step(&mut self, py: Python<'_>, direction: u8) -> PyResult<PyObject> {
        let direction = parse_direction(direction)?;
        let result = self.inner.step(direction);
        self.create_result_dict(py, result)
    }

    /// Current board as 4 lists of 4 integers.
    fn board(&self) -> Vec<Vec<u32>> {
        self.inner.board().into()
    }

    fn score(&self) -> u32 {
        self.inner.score()
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn max_tile(&self) -> u32 {
        self.inner.max_tile()
    }

    /// Legal actions as a list of 4 booleans [Up, Down, Left, Right].
    fn legal_actions(&self) -> Vec<bool> {
        self.inner.legal_actions().to_vec()
    }

    fn empty_count(&self) -> usize {
        self.inner.empty_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(score={}, max_tile={}, done={})",
            self.inner.score(),
            self.inner.max_tile(),
            self.inner.is_done()
        )
    }

    fn __str__(&self) -> String {
        format!("{}", self.inner)
    }
}

impl Game {
    fn create_result_dict(&self, py: Python<'_>, result: StepResult) -> PyResult<PyObject> {
        let dict = PyDict::new(py);
        dict.set_item("board", self.board())?;
        dict.set_item("score", self.inner.score())?;
        dict.set_item("reward", result.reward)?;
        dict.set_item("changed", result.changed)?;
        dict.set_item("done", result.done)?;
        Ok(dict.into())
    }
}

/// Slide a board. Returns (board, score_delta, changed).
#[pyfunction]
fn resolve(board: Vec<Vec<u32>>, direction: u8) -> PyResult<(Vec<Vec<u32>>, u32, bool)> {
    let result = engine::resolve(parse_board(board)?, parse_direction(direction)?);
    Ok((result.board.into(), result.score_delta, result.changed))
}

/// Whether any move remains on the board.
#[pyfunction]
fn has_moves(board: Vec<Vec<u32>>) -> PyResult<bool> {
    Ok(engine::has_moves(parse_board(board)?))
}

/// An empty 4x4 board.
#[pyfunction]
fn create_empty_board() -> Vec<Vec<u32>> {
    engine::create_empty_board().into()
}

/// Direction constants for convenience.
#[pyclass]
struct Directions;

#[pymethods]
impl Directions {
    #[classattr]
    const UP: u8 = Direction::Up as u8;
    #[classattr]
    const DOWN: u8 = Direction::Down as u8;
    #[classattr]
    const LEFT: u8 = Direction::Left as u8;
    #[classattr]
    const RIGHT: u8 = Direction::Right as u8;
}

/// Python module for the 2048 rule engine.
#[pymodule]
fn tile2048(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<Game>()?;
    m.add_class::<Directions>()?;
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    m.add_function(wrap_pyfunction!(has_moves, m)?)?;
    m.add_function(wrap_pyfunction!(create_empty_board, m)?)?;
    Ok(())
}
