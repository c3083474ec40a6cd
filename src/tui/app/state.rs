use crate::agents::{AgentKind, AgentTable, BotAgent, BotProfile, HumanAgent, Intent};
use crate::config::{MatchConfig, PlayerCount};
use crate::game::Game;
use crate::sim::{self, StepOutcome};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewMatch,
    MoveNext,
    MovePrev,
    PlaySelected,
    Pass,
    StepRandom,
    AutoFinish,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instance
    pub game: Game,
    // Seat whose hand is shown (does not auto-move with play)
    pub focus: usize,
    pub agents: AgentTable,
    pub config: MatchConfig,
    pub human_seat: Option<usize>,
    pub bot_delay_ms: u64,
    // Selected row in the current legal-move list
    pub move_index: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_players: PlayerCount,
    pub cfg_seed: u64,
    pub cfg_human_seat: Option<usize>,
    pub cfg_bot_delay_ms: u64,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = MatchConfig::default();
        let default_delay = 500;
        let mut app = Self {
            scene: Scene::Menu,
            game: Game::from_config(&config),
            focus: 0,
            agents: AgentTable::for_seats(config.players.get()),
            config,
            human_seat: Some(0),
            bot_delay_ms: default_delay,
            move_index: 0,
            menu_index: 0,
            cfg_players: config.players,
            cfg_seed: 0,
            cfg_human_seat: Some(0),
            cfg_bot_delay_ms: default_delay,
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        };
        app.seat_agents();
        app
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Whether the human seat is the one to play.
    pub fn human_to_act(&self) -> bool {
        self.scene == Scene::Table
            && !self.game.is_over()
            && self.human_seat == Some(self.game.current())
    }

    fn queue_intent(&mut self, intent: Intent) -> bool {
        if !self.human_to_act() {
            return false;
        }
        self.clear_action_error();
        self.agents.receive(self.game.current(), intent)
    }

    fn play_selected(&mut self) -> bool {
        let moves = self.game.legal_moves(self.game.current());
        if self.move_index >= moves.len() {
            return false;
        }
        self.queue_intent(Intent::Play(self.move_index))
    }

    fn pass(&mut self) -> bool {
        if !self.game.legal_moves(self.game.current()).is_empty() {
            self.set_action_error("Pass is only allowed with no legal move".to_string());
            return false;
        }
        self.queue_intent(Intent::Pass)
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub fn seat_label(&self, seat: usize) -> &'static str {
        match self.agents.agent_kind(seat) {
            Some(AgentKind::Human) => "You",
            Some(AgentKind::Bot) => "Bot",
            _ => "--",
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewMatch => {
                if self.scene == Scene::Table {
                    self.new_match();
                }
                false
            }
            InputAction::MoveNext => {
                let n = self.game.legal_moves(self.game.current()).len();
                if n > 0 {
                    self.move_index = (self.move_index + 1) % n;
                }
                false
            }
            InputAction::MovePrev => {
                let n = self.game.legal_moves(self.game.current()).len();
                if n > 0 {
                    self.move_index = (self.move_index + n - 1) % n;
                }
                false
            }
            InputAction::PlaySelected => self.play_selected(),
            InputAction::Pass => self.pass(),
            InputAction::StepRandom => {
                if self.scene == Scene::Table {
                    self.step_random()
                } else {
                    false
                }
            }
            InputAction::AutoFinish => {
                if self.scene == Scene::Table {
                    self.auto_finish();
                }
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSeat(idx) => {
                if self.scene == Scene::Table {
                    self.set_focus(idx);
                }
                false
            }
        }
    }

    /// Deal a fresh match with the applied configuration.
    pub fn new_match(&mut self) {
        self.game = Game::from_config(&self.config);
        self.seat_agents();
        self.focus = self.human_seat.unwrap_or(0);
        self.move_index = 0;
        self.history_offset = 0;
        self.clear_action_error();
    }

    pub(crate) fn seat_agents(&mut self) {
        let n = self.game.num_players();
        self.agents = AgentTable::for_seats(n);
        self.agents.set_min_action_delay_ms(150);
        for seat in 0..n {
            if self.human_seat == Some(seat) {
                self.agents.set_agent(seat, Some(Box::new(HumanAgent::new())));
            } else {
                let profile = BotProfile::default().with_delay_ms(self.bot_delay_ms);
                self.agents.set_agent(seat, Some(Box::new(BotAgent::new(profile))));
            }
        }
    }

    /// Play one random move for whoever is to act.
    pub fn step_random(&mut self) -> bool {
        let outcome = sim::step_random(&mut self.game);
        self.move_index = 0;
        self.finish_if_over();
        !matches!(outcome, StepOutcome::Finished)
    }

    /// Play random moves for every seat until the match ends.
    pub fn auto_finish(&mut self) {
        sim::simulate(&mut self.game);
        self.move_index = 0;
        self.finish_if_over();
    }

    fn finish_if_over(&mut self) {
        if self.game.is_over() {
            self.game.collect_remaining_table();
        }
    }

    pub fn focus_next(&mut self) {
        let n = self.game.num_players();
        self.focus = (self.focus + 1) % n;
    }

    pub fn focus_prev(&mut self) {
        let n = self.game.num_players();
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus(&mut self, idx: usize) {
        self.focus = idx % self.game.num_players();
    }

    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        self.agents.ensure_len(self.game.num_players());
        match self.agents.on_turn(&mut self.game) {
            Ok(true) => {
                self.clear_action_error();
                self.move_index = 0;
            }
            Ok(false) => {}
            Err(err) => self.set_action_error(err.to_string()),
        }
        self.finish_if_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_app(human: Option<usize>) -> AppState {
        let mut app = AppState::default();
        app.cfg_seed = 17;
        app.cfg_human_seat = human;
        app.cfg_bot_delay_ms = 0;
        app.apply_menu();
        app
    }

    #[test]
    fn intent_ignored_before_turn() {
        let mut app = table_app(Some(1));
        assert_eq!(app.game.current(), 0);
        let hand = app.game.player(1).unwrap().hand().to_vec();

        assert!(!app.handle_input(InputAction::PlaySelected));
        app.agents_on_turn(); // bot at seat 0 plays
        assert_eq!(app.game.current(), 1);
        assert_eq!(app.game.player(1).unwrap().hand(), hand.as_slice());
    }

    #[test]
    fn human_plays_selected_move() {
        let mut app = table_app(Some(0));
        let _ = app.handle_input(InputAction::MoveNext);
        assert_eq!(app.move_index, 1);
        let hand_before = app.game.player(0).unwrap().hand().len();
        assert!(app.handle_input(InputAction::PlaySelected));
        app.agents_on_turn();
        assert_eq!(app.game.current(), 1);
        assert_eq!(app.game.player(0).unwrap().hand().len(), hand_before - 1);
        let last = app.game.history().last().cloned().expect("move recorded");
        assert_eq!(last.seat, Some(0));
        assert_eq!(app.move_index, 0);
    }

    #[test]
    fn auto_finish_sweeps_and_scores() {
        let mut app = table_app(None);
        let _ = app.handle_input(InputAction::AutoFinish);
        assert!(app.game.is_over());
        assert!(app.game.table().is_empty());
        assert_eq!(app.game.score().len(), 2);
    }
}
