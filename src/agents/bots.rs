use crate::engine::GameEngine;
use crate::game::GameError;
use std::time::{Duration, Instant};
use tracing::debug;

use super::{AgentKind, PlayerAgent};

/// Pacing for a bot seat.
///
/// Bots pick uniformly among the legal moves with the game's own RNG, so a
/// seeded match is reproducible whoever sits at the table.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct BotProfile {
    /// Wait this long after the bot's turn starts before acting.
    pub delay_ms: u64,
}

impl BotProfile {
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// A bot that plays a random legal move, or passes when it has none.
pub struct BotAgent {
    profile: BotProfile,
    next_action_at: Option<Instant>,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        Self { profile, next_action_at: None }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, GameError> {
        if engine.is_over() || engine.current() != seat {
            return Ok(false);
        }
        let now = Instant::now();
        if self.profile.delay_ms > 0 {
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + Duration::from_millis(self.profile.delay_ms));
                    return Ok(false);
                }
                Some(next) if now < next => {
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        match engine.random_legal_move(seat) {
            Some(action) => {
                engine.apply_action(seat, action)?;
                debug!(seat, %action, "bot played");
            }
            None => debug!(seat, "bot passed"),
        }
        engine.advance_turn();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use std::thread;

    #[test]
    fn delay_throttles_actions() {
        let mut g = Game::seeded(2, 5).unwrap();
        let mut bot = BotAgent::new(BotProfile::default().with_delay_ms(15));

        // First tick schedules the bot without acting.
        assert!(!bot.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.current(), 0, "should remain on same seat due to delay");

        thread::sleep(Duration::from_millis(20));
        assert!(bot.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.current(), 1, "bot should act once delay elapsed");
    }

    #[test]
    fn bot_passes_with_empty_hand() {
        let mut g = Game::seeded(2, 5).unwrap();
        g.players[0].hand.clear();
        let mut bot = BotAgent::new(BotProfile::default());
        assert!(bot.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.current(), 1);
        assert_eq!(g.player(0).unwrap().hand().len(), 0);
    }

    #[test]
    fn finished_match_is_a_noop() {
        let mut g = Game::seeded(2, 5).unwrap();
        crate::sim::simulate(&mut g);
        let turns = g.turns();
        let mut bot = BotAgent::new(BotProfile::default());
        let seat = g.current();
        assert!(!bot.on_turn(&mut g, seat).unwrap());
        assert_eq!(g.turns(), turns);
    }
}
