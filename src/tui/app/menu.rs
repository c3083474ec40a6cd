use crate::config::{MatchConfig, PlayerCount};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Seed,
    HumanSeat,
    BotDelayMs,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Players, MenuItem::Seed, MenuItem::HumanSeat, MenuItem::BotDelayMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_players),
            MenuItem::Seed => match app.cfg_seed {
                0 => "Seed: random".to_string(),
                s => format!("Seed: {s}"),
            },
            MenuItem::HumanSeat => match app.cfg_human_seat {
                Some(seat) => format!("You play: P{}", seat + 1),
                None => "You play: nobody (watch bots)".to_string(),
            },
            MenuItem::BotDelayMs => format!("Bot Delay (ms): {}", app.cfg_bot_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => app.cfg_players = PlayerCount::Three,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.saturating_add(1),
            MenuItem::HumanSeat => {
                let n = app.cfg_players.get();
                app.cfg_human_seat = match app.cfg_human_seat {
                    None => Some(0),
                    Some(seat) if seat + 1 < n => Some(seat + 1),
                    Some(_) => None,
                };
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                app.cfg_players = PlayerCount::Two;
                if app.cfg_human_seat == Some(2) {
                    app.cfg_human_seat = Some(1);
                }
            }
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.saturating_sub(1),
            MenuItem::HumanSeat => {
                let n = app.cfg_players.get();
                app.cfg_human_seat = match app.cfg_human_seat {
                    None => Some(n - 1),
                    Some(0) => None,
                    Some(seat) => Some(seat - 1),
                };
            }
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_sub(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_players = self.config.players;
        self.cfg_seed = self.config.seed.unwrap_or(0);
        self.cfg_human_seat = self.human_seat;
        self.cfg_bot_delay_ms = self.bot_delay_ms;
        self.scene = Scene::Menu;
    }

    /// Adopt the edited settings and deal a new match.
    pub fn apply_menu(&mut self) {
        if let Some(seat) = self.cfg_human_seat {
            if seat >= self.cfg_players.get() {
                self.cfg_human_seat = None;
            }
        }
        let seed = (self.cfg_seed != 0).then_some(self.cfg_seed);
        self.config = MatchConfig { players: self.cfg_players, seed };
        self.human_seat = self.cfg_human_seat;
        self.bot_delay_ms = self.cfg_bot_delay_ms;
        self.new_match();
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
