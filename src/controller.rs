use log::debug;

use crate::board::NUM_CELLS;
use crate::game::GameEngine;
use crate::geometry::{WinLine, win_line};
use crate::types::{Player, RoundResult, Scores};

/// Rendering capability the controller drives. Implementations only draw;
/// every decision is made by the controller.
pub trait View {
    fn clear_board(&mut self);
    fn mark_cell(&mut self, cell: usize, player: Player);
    fn show_turn(&mut self, player: Player);
    fn show_win(&mut self, winner: Player);
    fn show_stalemate(&mut self);
    fn show_scores(&mut self, scores: Scores);
    fn draw_line(&mut self, line: &WinLine);
    fn hide_line(&mut self);
    /// Current rendered `(width, height)` of the board.
    fn board_size(&self) -> (f64, f64);
    /// Stroke color for `player`'s winning line.
    fn line_color(&self, player: Player) -> String;
}

/// Connects the engine to a view: one click in, one batch of view commands
/// out.
pub struct Controller<V: View> {
    engine: GameEngine,
    view: V,
}

impl<V: View> Controller<V> {
    pub fn new(view: V) -> Self {
        Self {
            engine: GameEngine::new(),
            view,
        }
    }

    /// Starts the first round and renders the empty board.
    pub fn start(&mut self) {
        self.engine.start_round();
        self.view.clear_board();
        self.view.hide_line();
        self.view.show_turn(self.engine.current_player());
        self.view.show_scores(self.engine.scores());
    }

    /// Clears the board for another round; scores are kept.
    pub fn new_round(&mut self) {
        self.start();
    }

    /// Handles a click on `cell`.
    ///
    /// Returns `None` when the click is ignored: out of range, already
    /// marked, or the round is over.
    pub fn click(&mut self, cell: usize) -> Option<RoundResult> {
        if cell >= NUM_CELLS {
            debug!("click outside the board: {cell}");
            return None;
        }
        if self.engine.result().is_over() {
            debug!("click on {cell} after the round ended");
            return None;
        }
        if !self.engine.cell(cell).is_some_and(|c| c.is_empty()) {
            debug!("click on occupied cell {cell}");
            return None;
        }

        let player = self.engine.current_player();
        self.engine.play_move(cell);
        self.view.mark_cell(cell, player);

        let result = self.engine.evaluate_round();
        match result {
            RoundResult::Win { winner, line } => {
                self.view.show_win(winner);
                self.view.show_scores(self.engine.scores());
                let (width, height) = self.view.board_size();
                let color = self.view.line_color(winner);
                self.view.draw_line(&win_line(line, width, height, &color));
            }
            RoundResult::Stalemate => self.view.show_stalemate(),
            RoundResult::InProgress => {
                self.engine.switch_turn();
                self.view.show_turn(self.engine.current_player());
            }
        }

        Some(result)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
