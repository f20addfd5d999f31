use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{GameError, check_board_size, check_cell};
use crate::game::GameEngine;
use crate::geometry::line_geometry as compute_line;
use crate::logger;
use crate::types::Player;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| GameError::Js(err.to_string()).into())
}

fn player_from_js(id: u8) -> Result<Player, JsError> {
    Player::from_id(id)
        .ok_or_else(|| GameError::InvalidConfig(format!("unknown player {id}")).into())
}

/// Engine handle for pages that do their own rendering.
///
/// Mirrors the engine one call per step; the page composes
/// `playMove` -> `evaluateRound` -> `switchTurn`.
#[wasm_bindgen]
pub struct TicTacToe {
    engine: GameEngine,
}

#[wasm_bindgen]
impl TicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
        }
    }

    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self) {
        self.engine.start_round();
    }

    /// 1 or 2.
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.engine.current_player().id()
    }

    #[wasm_bindgen(js_name = playMove)]
    pub fn play_move(&mut self, cell: usize) -> Result<(), JsError> {
        let cell = check_cell(cell)?;
        self.engine.play_move(cell);
        Ok(())
    }

    /// `{ kind: "in_progress" | "win" | "stalemate", winner?, line? }`
    #[wasm_bindgen(js_name = evaluateRound)]
    pub fn evaluate_round(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.engine.evaluate_round())
    }

    #[wasm_bindgen(js_name = switchTurn)]
    pub fn switch_turn(&mut self) {
        self.engine.switch_turn();
    }

    #[wasm_bindgen(js_name = playerScore)]
    pub fn player_score(&self, player: u8) -> Result<u32, JsError> {
        Ok(self.engine.player_score(player_from_js(player)?))
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.to_game_state())
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

/// `{ x1, y1, x2, y2 }` for the line through two cells of a board of the
/// given size.
#[wasm_bindgen(js_name = lineGeometry)]
pub fn line_geometry(first: usize, last: usize, width: f64, height: f64) -> Result<JsValue, JsError> {
    let first = check_cell(first)?;
    let last = check_cell(last)?;
    let (width, height) = check_board_size(width, height)?;
    to_js(&compute_line(first, last, width, height))
}

/// Routes `log` output to the browser console at `level`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsError> {
    logger::init(level)?;
    Ok(())
}
