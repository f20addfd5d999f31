use serde::Serialize;

use crate::board::pos_to_row_col;

/// Endpoints of the strike-through line, in board pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineEndpoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Endpoints plus the stroke color for the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

impl WinLine {
    pub fn endpoints(&self) -> LineEndpoints {
        LineEndpoints {
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
        }
    }
}

/// Maps the first and last cell of a winning triple to a line through the
/// centers of those cells.
///
/// Band `b` of 3 is centered at `(1 + 2b) / 6` of the board extent. Depends on
/// the current board size, so call it after layout.
pub fn line_geometry(first: usize, last: usize, width: f64, height: f64) -> LineEndpoints {
    let (x1, y1) = cell_center(first, width, height);
    let (x2, y2) = cell_center(last, width, height);
    LineEndpoints { x1, y1, x2, y2 }
}

pub fn win_line(line: (usize, usize), width: f64, height: f64, color: &str) -> WinLine {
    let LineEndpoints { x1, y1, x2, y2 } = line_geometry(line.0, line.1, width, height);
    WinLine {
        x1,
        y1,
        x2,
        y2,
        color: color.to_string(),
    }
}

fn cell_center(pos: usize, width: f64, height: f64) -> (f64, f64) {
    let (row, col) = pos_to_row_col(pos);
    (band_center(col, width), band_center(row, height))
}

fn band_center(band: usize, extent: f64) -> f64 {
    (1 + 2 * band) as f64 * extent / 6.0
}
