use log::{debug, info};

use crate::board::{Board, Cell, NUM_CELLS};
use crate::types::{GameState, Player, RoundResult, Scores};

/// Two-player tic-tac-toe state: board, turn order and scores.
///
/// Moving, evaluating and advancing the turn are separate steps; the caller
/// composes them as apply -> evaluate -> switch (only while in progress).
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    scores: [u32; 2],
    result: RoundResult,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board and hands the first move to player one.
    /// Scores are kept.
    pub fn start_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::One;
        self.result = RoundResult::InProgress;
        info!("round started, scores {:?}", self.scores());
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Marks `cell` for the current player.
    ///
    /// Caller contract: `cell` is in `0..9`. Occupied cells are left as they
    /// are, and nothing is written once the round has been decided.
    pub fn play_move(&mut self, cell: usize) {
        debug_assert!(cell < NUM_CELLS, "cell index out of range: {cell}");

        if self.result.is_over() {
            debug!("ignoring move at {cell}: round is over");
            return;
        }
        if self.board.mark(cell, self.current_player) {
            debug!("player {} marked cell {cell}", self.current_player.id());
        } else {
            debug!("ignoring move at {cell}: cell is not available");
        }
    }

    /// Checks the fixed lines in order, then fullness.
    ///
    /// A win is credited to the current player once; evaluating a decided
    /// round again returns the same result without scoring it twice.
    pub fn evaluate_round(&mut self) -> RoundResult {
        if self.result.is_over() {
            return self.result;
        }

        self.result = if let Some([first, _, last]) = self.board.winning_line() {
            let winner = self.current_player;
            self.scores[winner.index()] += 1;
            info!(
                "player {} wins on line ({first}, {last})",
                winner.id()
            );
            RoundResult::Win {
                winner,
                line: (first, last),
            }
        } else if self.board.is_full() {
            info!("stalemate");
            RoundResult::Stalemate
        } else {
            RoundResult::InProgress
        };

        self.result
    }

    /// Passes the turn. Only meaningful after `evaluate_round` reported
    /// `InProgress`.
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub fn player_score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn scores(&self) -> Scores {
        Scores {
            player_one: self.player_score(Player::One),
            player_two: self.player_score(Player::Two),
        }
    }

    pub fn cell(&self, cell: usize) -> Option<Cell> {
        self.board.get(cell)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Last evaluated result of the current round.
    pub fn result(&self) -> RoundResult {
        self.result
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            scores: self.scores(),
            result: self.result,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.result = RoundResult::InProgress;
    }
}
