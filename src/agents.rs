//! Agents: pluggable players (bots, and humans via a frontend).
//!
//! This module introduces a small trait `PlayerAgent` and a minimal manager
//! `AgentTable` that coordinates which agent controls which seat. It lives in
//! the library so UIs (console/TUI) remain thin and never pick moves
//! themselves.

use crate::engine::GameEngine;
use crate::game::GameError;
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Intent {
    /// Play the move at this index of the current legal-move list.
    Play(usize),
    /// Advance without playing; only honored when no move is available.
    Pass,
}

/// A seat controller that can act for a player when it is their turn.
pub trait PlayerAgent {
    /// Called when `seat` is the current actor. Returns whether the agent
    /// acted (played or passed) and the turn advanced.
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, GameError>;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat intent; default is to ignore and return false.
    fn receive(&mut self, _intent: Intent) -> bool {
        false
    }
}

mod bots;

pub use bots::{BotAgent, BotProfile};

/// A simple agent that executes user intents when it's their turn.
pub struct HumanAgent {
    pending: Option<Intent>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, intent: Intent) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(intent);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, GameError> {
        if engine.is_over() {
            self.pending = None;
            return Ok(false);
        }
        if engine.current() != seat {
            return Ok(false);
        }
        let Some(intent) = self.pending.take() else {
            return Ok(false);
        };
        let moves = engine.legal_moves(seat);
        match intent {
            Intent::Play(index) => {
                let Some(&action) = moves.get(index) else {
                    return Ok(false);
                };
                engine.apply_action(seat, action)?;
                engine.advance_turn();
                Ok(true)
            }
            Intent::Pass if moves.is_empty() => {
                engine.advance_turn();
                Ok(true)
            }
            Intent::Pass => Ok(false),
        }
    }
}

/// Manages a set of optional agents, one per seat, and drives the agent at the
/// current seat when appropriate.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Bot) => 'B',
                Some(AgentKind::Human) => 'H',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        seats.resize_with(n, || None);
        Self { seats, min_action_delay: Duration::from_millis(0), next_action_at: None }
    }

    /// Ensure the table has exactly `n` seats.
    pub fn ensure_len(&mut self, n: usize) {
        if self.seats.len() < n {
            self.seats.resize_with(n, || None);
        }
        if self.seats.len() > n {
            self.seats.truncate(n);
        }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.ensure_len(seat + 1);
        }
        self.seats[seat] = agent;
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    /// Send an intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: usize, intent: Intent) -> bool {
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            return agent.receive(intent);
        }
        false
    }

    /// Whether any non-human (bot) agents are assigned.
    pub fn any_bots(&self) -> bool {
        self.seats.iter().filter_map(|a| a.as_deref()).any(|ag| matches!(ag.kind(), AgentKind::Bot))
    }

    /// Set a global minimum delay between any actions at the table.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the agent assigned to the current seat, if any.
    pub fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, GameError> {
        let seat = engine.current();
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            let is_bot = matches!(agent.kind(), AgentKind::Bot);
            let now = Instant::now();
            if is_bot {
                if let Some(next) = self.next_action_at {
                    if now < next {
                        return Ok(false);
                    }
                }
            }
            let acted = agent.on_turn(engine, seat)?;
            if acted && self.min_action_delay > Duration::from_millis(0) {
                self.next_action_at = Some(now + self.min_action_delay);
            }
            return Ok(acted);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn human_plays_queued_move_on_their_turn() {
        let mut g = Game::seeded(2, 8).unwrap();
        let mut human = HumanAgent::new();
        assert!(human.receive(Intent::Play(0)));
        assert!(!human.receive(Intent::Play(1)), "one pending intent at a time");

        assert!(!human.on_turn(&mut g, 1).unwrap(), "not seat 1's turn");
        let before = g.player(0).unwrap().hand().len();
        assert!(human.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.player(0).unwrap().hand().len(), before - 1);
        assert_eq!(g.current(), 1);
    }

    #[test]
    fn human_pass_ignored_while_moves_exist() {
        let mut g = Game::seeded(2, 8).unwrap();
        let mut human = HumanAgent::new();
        human.receive(Intent::Pass);
        assert!(!human.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.current(), 0);
    }

    #[test]
    fn human_out_of_range_move_is_dropped() {
        let mut g = Game::seeded(2, 8).unwrap();
        let mut human = HumanAgent::new();
        human.receive(Intent::Play(999));
        assert!(!human.on_turn(&mut g, 0).unwrap());
        assert_eq!(g.current(), 0);
        assert!(human.receive(Intent::Play(0)), "dropped intent frees the slot");
    }

    #[test]
    fn table_drives_only_current_seat() {
        let mut g = Game::seeded(2, 8).unwrap();
        let mut table = AgentTable::for_seats(2);
        table.set_agent(1, Some(Box::new(BotAgent::new(BotProfile::default()))));
        assert!(!table.on_turn(&mut g).unwrap(), "seat 0 has no agent");
        g.advance_turn();
        assert!(table.on_turn(&mut g).unwrap());
        assert_eq!(g.current(), 0);
        assert_eq!(format!("{table:?}"), "AgentTable(-B)");
    }
}
