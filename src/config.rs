//! Match configuration shared by the CLI and the TUI menu.

use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unsupported player count {0}: only 2 or 3 players are supported")]
    PlayerCount(usize),
}

/// The two supported table sizes. Each fixes how the deck is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerCount {
    Two,
    Three,
}

impl PlayerCount {
    pub const fn get(self) -> usize {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Three => 3,
        }
    }

    /// Cards dealt to each hand at the start of the match.
    pub const fn hand_size(self) -> usize {
        match self {
            PlayerCount::Two => 10,
            PlayerCount::Three => 13,
        }
    }

    /// Loose cards placed on the table at the start of the match.
    pub const fn table_starters(self) -> usize {
        match self {
            PlayerCount::Two => 0,
            PlayerCount::Three => 1,
        }
    }

    /// Whether the undealt remainder is held back for a second deal.
    pub const fn has_stock(self) -> bool {
        matches!(self, PlayerCount::Two)
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(PlayerCount::Two),
            3 => Ok(PlayerCount::Three),
            _ => Err(ConfigError::PlayerCount(n)),
        }
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Everything needed to start a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub players: PlayerCount,
    /// Seed for the match RNG; `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn new(players: PlayerCount) -> Self {
        Self { players, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The seed to use, drawing one from the thread RNG when unset.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(PlayerCount::Two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_or_three_players() {
        assert_eq!(PlayerCount::try_from(2), Ok(PlayerCount::Two));
        assert_eq!(PlayerCount::try_from(3), Ok(PlayerCount::Three));
        assert_eq!(PlayerCount::try_from(1), Err(ConfigError::PlayerCount(1)));
        assert_eq!(PlayerCount::try_from(4), Err(ConfigError::PlayerCount(4)));
    }

    #[test]
    fn deal_shape_accounts_for_whole_deck() {
        for pc in [PlayerCount::Two, PlayerCount::Three] {
            let dealt = pc.get() * pc.hand_size() + pc.table_starters();
            let stock = if pc.has_stock() { crate::deck::DECK_SIZE - dealt } else { 0 };
            assert_eq!(dealt + stock, crate::deck::DECK_SIZE);
        }
    }

    #[test]
    fn explicit_seed_is_kept() {
        let cfg = MatchConfig::new(PlayerCount::Three).with_seed(9);
        assert_eq!(cfg.resolve_seed(), 9);
    }
}
