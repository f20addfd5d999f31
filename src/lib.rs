use wasm_bindgen::prelude::*;

pub mod api;
pub mod board;
pub mod config;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod game;
pub mod geometry;
pub mod logger;
pub mod types;

pub use controller::{Controller, View};
pub use game::GameEngine;
pub use geometry::{LineEndpoints, WinLine, line_geometry, win_line};
pub use types::{GameState, Player, RoundResult, Scores};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
