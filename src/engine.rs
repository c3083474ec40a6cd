// Game engine API boundary. This trait exposes the match operations and
// queries so presentation layers (console, TUI, bots) can drive a game
// without depending on its RNG type or internals. It is implemented for the
// core `Game` type.

use crate::action::Action;
use crate::game::{Game, GameError, Player};
use crate::scoring::ScoreBreakdown;
use rand::Rng;

pub trait GameEngine {
    // Moves
    fn legal_moves(&self, seat: usize) -> Vec<Action>;
    fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), GameError>;
    fn random_legal_move(&mut self, seat: usize) -> Option<Action>;

    // Turn sequencing
    fn advance_turn(&mut self);
    fn is_over(&self) -> bool;
    fn collect_remaining_table(&mut self);

    // Queries
    fn current(&self) -> usize;
    fn num_players(&self) -> usize;
    fn player(&self, seat: usize) -> Option<&Player>;
    fn stock_len(&self) -> usize;
    fn table_state_text(&self) -> String;
    fn score(&self) -> Vec<u32>;
    fn score_breakdowns(&self) -> Vec<ScoreBreakdown>;
}

impl<R: Rng> GameEngine for Game<R> {
    fn legal_moves(&self, seat: usize) -> Vec<Action> {
        self.legal_moves(seat)
    }
    fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), GameError> {
        self.apply_action(seat, action)
    }
    fn random_legal_move(&mut self, seat: usize) -> Option<Action> {
        self.random_legal_move(seat)
    }

    fn advance_turn(&mut self) {
        self.advance_turn();
    }
    fn is_over(&self) -> bool {
        self.is_over()
    }
    fn collect_remaining_table(&mut self) {
        self.collect_remaining_table();
    }

    fn current(&self) -> usize {
        self.current()
    }
    fn num_players(&self) -> usize {
        self.num_players()
    }
    fn player(&self, seat: usize) -> Option<&Player> {
        self.player(seat)
    }
    fn stock_len(&self) -> usize {
        self.stock_len()
    }
    fn table_state_text(&self) -> String {
        self.table_state_text()
    }
    fn score(&self) -> Vec<u32> {
        self.score()
    }
    fn score_breakdowns(&self) -> Vec<ScoreBreakdown> {
        self.score_breakdowns()
    }
}
