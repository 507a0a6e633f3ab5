//! tile-wasm - WebAssembly entry points and bindings for browser execution.
//!
//! Grids cross the boundary as arrays of rows with `null` for empty cells,
//! and game states as `{ board, score, bestScore, gameStatus }`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use tile_core::{Direction, GameState, Grid, Status};
use tile_engine::{
    create_initial_grid, evaluate_status, move_grid, spawn_tile, spawn_tile_thread, RuleConfig,
};
use tile_session::Game;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Move result in the shape the browser client already uses.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsMoveResult {
    pub result: Grid,
    pub is_moved: bool,
    pub score: u64,
}

#[wasm_bindgen]
pub struct JsGame {
    inner: Game,
}

#[wasm_bindgen]
impl JsGame {
    /// New 4x4 game. `win_value` is usually 2048.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, win_value: u32) -> Result<JsGame, JsError> {
        let config = RuleConfig::classic().with_win_value(win_value);
        Ok(Self {
            inner: Game::new(config, seed)?,
        })
    }

    /// Resume from a saved `{ board, score, bestScore }` object.
    pub fn load(&mut self, state: JsValue, seed: u64) -> Result<(), JsError> {
        let state: GameState = serde_wasm_bindgen::from_value(state)?;
        self.inner = Game::from_state(self.inner.config().clone(), state, seed)?;
        Ok(())
    }

    /// Take a turn; returns `{ moved, scoreGained, status }`.
    pub fn play(&mut self, direction: &str) -> Result<JsValue, JsError> {
        let direction: Direction = direction.parse()?;
        let outcome = self.inner.play(direction)?;
        to_js(&outcome)
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(self.inner.state())
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u64 {
        self.inner.state().score
    }

    #[wasm_bindgen(getter, js_name = bestScore)]
    pub fn best_score(&self) -> u64 {
        self.inner.state().best_score
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        status_name(self.inner.state().status).to_string()
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }
}

#[wasm_bindgen(js_name = moveGrid)]
pub fn move_grid_js(grid: JsValue, direction: &str) -> Result<JsValue, JsError> {
    let grid: Grid = serde_wasm_bindgen::from_value(grid)?;
    let direction: Direction = direction.parse()?;
    let outcome = move_grid(&grid, direction)?;
    to_js(&JsMoveResult {
        result: outcome.grid,
        is_moved: outcome.moved,
        score: outcome.score_gained,
    })
}

/// Spawn one tile. Without a seed the browser's entropy source is used.
#[wasm_bindgen(js_name = spawnTile)]
pub fn spawn_tile_js(grid: JsValue, seed: Option<u64>) -> Result<JsValue, JsError> {
    let grid: Grid = serde_wasm_bindgen::from_value(grid)?;
    let next = match seed {
        Some(seed) => spawn_tile(&grid, &mut StdRng::seed_from_u64(seed)),
        None => spawn_tile_thread(&grid),
    };
    to_js(&next)
}

#[wasm_bindgen(js_name = evaluateStatus)]
pub fn evaluate_status_js(grid: JsValue, win_value: u32) -> Result<String, JsError> {
    let grid: Grid = serde_wasm_bindgen::from_value(grid)?;
    Ok(status_name(evaluate_status(&grid, win_value)).to_string())
}

#[wasm_bindgen(js_name = createInitialGrid)]
pub fn create_initial_grid_js(size: usize, seed: u64) -> Result<JsValue, JsError> {
    let mut rng = StdRng::seed_from_u64(seed);
    to_js(&create_initial_grid(size, &mut rng))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Playing => "playing",
        Status::Win => "win",
        Status::Lose => "lose",
    }
}
