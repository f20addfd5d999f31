use thiserror::Error;

use crate::board::NUM_CELLS;

/// Failures reported across the JS boundary. The engine itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("cell index {0} out of range (expected 0..9)")]
    CellOutOfRange(usize),

    #[error("invalid board size {width}x{height}")]
    InvalidBoardSize { width: f64, height: f64 },

    #[error("no element matches selector `{0}`")]
    MissingElement(String),

    #[error("invalid view config: {0}")]
    InvalidConfig(String),

    #[error("browser error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Rejects indices outside the board.
pub fn check_cell(cell: usize) -> Result<usize> {
    if cell < NUM_CELLS {
        Ok(cell)
    } else {
        Err(GameError::CellOutOfRange(cell))
    }
}

/// Board dimensions must be positive and finite.
pub fn check_board_size(width: f64, height: f64) -> Result<(f64, f64)> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok((width, height))
    } else {
        Err(GameError::InvalidBoardSize { width, height })
    }
}
