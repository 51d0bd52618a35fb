//! # 2048 WebAssembly Bindings
//!
//! JavaScript-friendly bindings to the 2048 rule engine using wasm-bindgen.
//! Exposes a seeded session class plus the stateless board operations, so a
//! web front end can either hand the whole game to Rust or drive the engine
//! one pure call at a time.

use serde::Serialize;
use tile2048_core::{self as engine, Board, Direction, EngineError, Game, StepResult};
use wasm_bindgen::prelude::*;

/// Result of a step operation, serialized for JavaScript.
#[derive(Serialize)]
pub struct JsStepResult {
    /// The updated board state (16 elements, row-major order).
    pub board: Vec<u32>,
    /// Current total score.
    pub score: u32,
    /// Points earned from this move.
    pub reward: u32,
    /// Whether the board changed.
    pub changed: bool,
    /// Whether the game is over.
    pub done: bool,
}

/// Result of a stateless `resolve` call, serialized for JavaScript.
#[derive(Serialize)]
pub struct JsMoveResult {
    pub board: Vec<u32>,
    #[serde(rename = "scoreDelta")]
    pub score_delta: u32,
    pub changed: bool,
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_board(cells: &[u32]) -> Result<Board, JsValue> {
    Board::from_cells(cells).map_err(to_js_error)
}

/// WebAssembly wrapper for a seeded 2048 session.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game with the given seed.
    ///
    /// The seed is a 64-bit integer used to initialize the deterministic RNG.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WasmGame {
        WasmGame {
            game: Game::new(seed),
        }
    }

    /// Reset the game to initial state with a new seed.
    pub fn reset(&mut self, seed: u64) {
        self.game.reset(seed);
    }

    /// Execute a move in the given direction.
    ///
    /// Direction values: 0 = Up, 1 = Down, 2 = Left, 3 = Right. Any other value
    /// throws.
    ///
    /// Returns an object with `board`, `score`, `reward`, `changed`, `done`.
    pub fn step(&mut self, direction: u8) -> Result<JsValue, JsValue> {
        let direction = Direction::try_from(direction).map_err(to_js_error)?;
        let result = self.game.step(direction);
        self.create_js_result(result)
    }

    /// Get the current board state as a JavaScript Uint32Array.
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> Vec<u32> {
        self.game.board().cells().to_vec()
    }

    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self) -> u32 {
        self.game.score()
    }

    #[wasm_bindgen(js_name = isDone)]
    pub fn is_done(&self) -> bool {
        self.game.is_done()
    }

    #[wasm_bindgen(js_name = getMaxTile)]
    pub fn get_max_tile(&self) -> u32 {
        self.game.max_tile()
    }

    /// Get legal actions as an array of 4 flags [Up, Down, Left, Right].
    #[wasm_bindgen(js_name = getLegalActions)]
    pub fn get_legal_actions(&self) -> Vec<u8> {
        self.game
            .legal_actions()
            .iter()
            .map(|&b| u8::from(b))
            .collect()
    }

    fn create_js_result(&self, result: StepResult) -> Result<JsValue, JsValue> {
        let js_result = JsStepResult {
            board: self.game.board().cells().to_vec(),
            score: self.game.score(),
            reward: result.reward,
            changed: result.changed,
            done: result.done,
        };
        serde_wasm_bindgen::to_value(&js_result).map_err(JsValue::from)
    }
}

// =============================================================================
// Stateless engine calls
// =============================================================================

/// Slide a 16-cell board. Returns `{ board, scoreDelta, changed }`.
#[wasm_bindgen]
pub fn resolve(cells: Vec<u32>, direction: u8) -> Result<JsValue, JsValue> {
    let board = parse_board(&cells)?;
    let direction = Direction::try_from(direction).map_err(to_js_error)?;
    let result = engine::resolve(board, direction);
    let js_result = JsMoveResult {
        board: result.board.cells().to_vec(),
        score_delta: result.score_delta,
        changed: result.changed,
    };
    serde_wasm_bindgen::to_value(&js_result).map_err(JsValue::from)
}

/// Whether any move remains on a 16-cell board.
#[wasm_bindgen(js_name = hasMoves)]
pub fn has_moves(cells: Vec<u32>) -> Result<bool, JsValue> {
    Ok(engine::has_moves(parse_board(&cells)?))
}

/// An empty 16-cell board.
#[wasm_bindgen(js_name = createEmptyBoard)]
pub fn create_empty_board() -> Vec<u32> {
    engine::create_empty_board().cells().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = WasmGame::new(42);
        assert!(!game.is_done());
        assert_eq!(game.get_board().len(), 16);
        assert_eq!(game.get_board().iter().filter(|&&v| v != 0).count(), 2);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(WasmGame::new(9).get_board(), WasmGame::new(9).get_board());
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(create_empty_board(), vec![0; 16]);
    }
}
