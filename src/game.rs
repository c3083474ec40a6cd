use crate::action::Action;
use crate::cards::{Card, Rank, Suit};
use crate::config::{ConfigError, MatchConfig, PlayerCount};
use crate::deck::Deck;
use crate::scoring::{score_pile, ScoreBreakdown};
use crate::table::{Build, Table};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// The card that is swapped for the table starter in the 3-player opening.
pub const EXCHANGE_CARD: Card = Card::new(Rank::Three, Suit::Hearts);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no player at seat {0}")]
    UnknownSeat(usize),
    #[error("seat {seat} cannot act while seat {active} is to play")]
    OutOfTurn { seat: usize, active: usize },
    #[error("hand index {index} out of range: hand holds {len} cards")]
    HandIndex { index: usize, len: usize },
    #[error("table index {index} out of range: {len} loose cards")]
    TableIndex { index: usize, len: usize },
    #[error("build index {index} out of range: {len} builds")]
    BuildIndex { index: usize, len: usize },
    #[error("seat {0} is not an opponent that can be stolen from")]
    StealTarget(usize),
    #[error("seat {0} has no captured cards to steal")]
    EmptyPile(usize),
    #[error("not a legal move in the current position: {0}")]
    NotOffered(Action),
    #[error("the match is over")]
    GameOver,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("illegal action: {0}")]
    IllegalAction(#[from] ActionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveVerb {
    Exchange,
    Throw,
    Capture,
    CaptureBuild,
    Build,
    Steal { from: usize },
    SecondDeal,
    Sweep,
}

impl MoveVerb {
    pub fn label(self) -> &'static str {
        match self {
            MoveVerb::Exchange => "Exchange",
            MoveVerb::Throw => "Throw",
            MoveVerb::Capture => "Capture",
            MoveVerb::CaptureBuild => "Take build",
            MoveVerb::Build => "Build",
            MoveVerb::Steal { .. } => "Steal",
            MoveVerb::SecondDeal => "Second deal",
            MoveVerb::Sweep => "Sweep",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    /// Seat that acted or received cards; `None` for table-wide events.
    pub seat: Option<usize>,
    pub verb: MoveVerb,
    pub cards: Vec<Card>,
    pub total: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Vec<Card>,
    pub(crate) captured: Vec<Card>,
}

impl Player {
    fn new(name: String) -> Self {
        Self { name, hand: Vec::new(), captured: Vec::new() }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards the player can still play, in hand order
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the captured pile, oldest first
    pub fn captured(&self) -> &[Card] {
        &self.captured
    }

    /// The most recently captured card: the one an opponent may steal.
    pub fn top_capture(&self) -> Option<Card> {
        self.captured.last().copied()
    }
}

/// One match of Casino.
///
/// The game owns its random source; shuffling and [`Game::random_legal_move`]
/// draw from the same stream, so a seeded `R` reproduces a whole match.
///
/// ```
/// use casino_rs::game::Game;
///
/// let mut game = Game::seeded(2, 7).unwrap();
/// let seat = game.current();
/// let moves = game.legal_moves(seat);
/// game.apply_action(seat, moves[0]).unwrap();
/// game.advance_turn();
/// assert_eq!(game.current(), 1);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game<R = ChaCha8Rng> {
    pub(crate) player_count: PlayerCount,
    pub(crate) players: Vec<Player>,
    pub(crate) table: Table,
    pub(crate) stock: Deck,
    pub(crate) current: usize,
    pub(crate) last_capturer: Option<usize>,
    /// Table cards swept when nobody ever captured; they belong to no one.
    pub(crate) abandoned: Vec<Card>,
    pub(crate) turns: usize,
    history: Vec<HistoryEntry>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Create a game whose shuffle and automated choices follow `seed`.
    pub fn seeded(player_count: usize, seed: u64) -> Result<Self, GameError> {
        Self::new(player_count, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::with_player_count(config.players, ChaCha8Rng::seed_from_u64(config.resolve_seed()))
    }
}

impl<R: Rng> Game<R> {
    /// Create and deal a new match. Fails unless `player_count` is 2 or 3.
    pub fn new(player_count: usize, rng: R) -> Result<Self, GameError> {
        let count = PlayerCount::try_from(player_count)?;
        Ok(Self::with_player_count(count, rng))
    }

    pub fn with_player_count(player_count: PlayerCount, rng: R) -> Self {
        let players = (1..=player_count.get()).map(|i| Player::new(format!("P{i}"))).collect();
        let mut game = Self {
            player_count,
            players,
            table: Table::default(),
            stock: Deck::empty(),
            current: 0,
            last_capturer: None,
            abandoned: Vec::new(),
            turns: 0,
            history: Vec::new(),
            rng,
        };
        let mut deck = Deck::forty();
        deck.shuffle_with(&mut game.rng);
        game.deal(deck);
        game
    }

    fn deal(&mut self, mut deck: Deck) {
        let hand_size = self.player_count.hand_size();
        for p in &mut self.players {
            p.hand = deck.draw_n(hand_size);
        }
        for _ in 0..self.player_count.table_starters() {
            if let Some(c) = deck.draw() {
                self.table.loose.push(c);
            }
        }
        // 3 players consume the whole deck, so only the 2-player stock is non-empty
        self.stock = deck;
        debug!(
            players = self.players.len(),
            hand_size,
            starters = self.table.loose.len(),
            stock = self.stock.len(),
            "dealt new match"
        );
        if self.player_count.table_starters() > 0 {
            self.resolve_opening_exchange();
        }
    }

    /// The first player (in seat order) holding the 3 of hearts swaps it
    /// with the table starter.
    pub(crate) fn resolve_opening_exchange(&mut self) {
        let Some(&starter) = self.table.loose.first() else {
            return;
        };
        let holder = self.players.iter().enumerate().find_map(|(seat, p)| {
            p.hand.iter().position(|&c| c == EXCHANGE_CARD).map(|pos| (seat, pos))
        });
        let Some((seat, pos)) = holder else {
            debug!(%starter, "no exchange card in any hand; starter stays");
            return;
        };
        let hand = &mut self.players[seat].hand;
        hand.remove(pos);
        hand.push(starter);
        self.table.loose[0] = EXCHANGE_CARD;
        debug!(seat, %starter, "opening exchange");
        self.record(Some(seat), MoveVerb::Exchange, vec![EXCHANGE_CARD, starter], None);
    }

    /// Every legal action for `seat`, in a stable order: per hand card
    /// throw, captures, build captures and builds; then steals per opponent.
    pub fn legal_moves(&self, seat: usize) -> Vec<Action> {
        let Some(player) = self.players.get(seat) else {
            return Vec::new();
        };
        let hand = &player.hand;
        let loose = &self.table.loose;
        let mut moves = Vec::new();

        for (hand_index, card) in hand.iter().enumerate() {
            moves.push(Action::Throw { hand_index });
            for (table_index, t) in loose.iter().enumerate() {
                if t.value() == card.value() {
                    moves.push(Action::Capture { hand_index, table_index });
                }
            }
            for (build_index, b) in self.table.builds.iter().enumerate() {
                if b.total == card.value() {
                    moves.push(Action::CaptureBuild { hand_index, build_index });
                }
            }
            for (table_index, t) in loose.iter().enumerate() {
                let target_total = card.value() + t.value();
                // only checks that some other hand card could take the build later
                let backed = hand
                    .iter()
                    .enumerate()
                    .any(|(i, c)| i != hand_index && c.value() == target_total);
                if backed {
                    moves.push(Action::Build { hand_index, table_index, target_total });
                }
            }
        }

        for (steal_from, opponent) in self.players.iter().enumerate() {
            if steal_from == seat {
                continue;
            }
            let Some(top) = opponent.top_capture() else {
                continue;
            };
            for (table_index, t) in loose.iter().enumerate() {
                let target_total = top.value() + t.value();
                if hand.iter().any(|c| c.value() == target_total) {
                    moves.push(Action::StealBuild { table_index, target_total, steal_from });
                }
            }
        }
        trace!(seat, count = moves.len(), "legal moves");
        moves
    }

    fn validate(&self, seat: usize, action: &Action) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        let player = self.players.get(seat).ok_or(ActionError::UnknownSeat(seat))?;
        if seat != self.current {
            return Err(ActionError::OutOfTurn { seat, active: self.current });
        }
        let hand_len = player.hand.len();
        let table_len = self.table.loose.len();
        let builds_len = self.table.builds.len();
        match *action {
            Action::Throw { hand_index } => check_hand(hand_index, hand_len)?,
            Action::Capture { hand_index, table_index }
            | Action::Build { hand_index, table_index, .. } => {
                check_hand(hand_index, hand_len)?;
                check_table(table_index, table_len)?;
            }
            Action::CaptureBuild { hand_index, build_index } => {
                check_hand(hand_index, hand_len)?;
                if build_index >= builds_len {
                    return Err(ActionError::BuildIndex { index: build_index, len: builds_len });
                }
            }
            Action::StealBuild { table_index, steal_from, .. } => {
                let victim = self
                    .players
                    .get(steal_from)
                    .filter(|_| steal_from != seat)
                    .ok_or(ActionError::StealTarget(steal_from))?;
                if victim.captured.is_empty() {
                    return Err(ActionError::EmptyPile(steal_from));
                }
                check_table(table_index, table_len)?;
            }
        }
        if !self.legal_moves(seat).contains(action) {
            return Err(ActionError::NotOffered(*action));
        }
        Ok(())
    }

    /// Apply one action for `seat`.
    ///
    /// The action must be one [`Game::legal_moves`] currently offers to the
    /// player whose turn it is; anything else is rejected before any state
    /// changes. Does not advance the turn.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), GameError> {
        self.validate(seat, &action)?;
        match action {
            Action::Throw { hand_index } => {
                let card = self.players[seat].hand.remove(hand_index);
                self.table.loose.push(card);
                self.record(Some(seat), MoveVerb::Throw, vec![card], None);
            }
            Action::Capture { hand_index, table_index } => {
                let card = self.players[seat].hand.remove(hand_index);
                let taken = self.table.loose.remove(table_index);
                self.players[seat].captured.extend([card, taken]);
                self.last_capturer = Some(seat);
                self.record(Some(seat), MoveVerb::Capture, vec![card, taken], None);
            }
            Action::CaptureBuild { hand_index, build_index } => {
                let card = self.players[seat].hand.remove(hand_index);
                let build = self.table.builds.remove(build_index);
                let mut cards = Vec::with_capacity(1 + build.cards.len());
                cards.push(card);
                cards.extend_from_slice(&build.cards);
                self.players[seat].captured.extend_from_slice(&cards);
                self.last_capturer = Some(seat);
                self.record(Some(seat), MoveVerb::CaptureBuild, cards, Some(build.total));
            }
            Action::Build { hand_index, table_index, target_total } => {
                let card = self.players[seat].hand.remove(hand_index);
                let paired = self.table.loose.remove(table_index);
                self.table.builds.push(Build::new(vec![card, paired], target_total));
                self.record(Some(seat), MoveVerb::Build, vec![card, paired], Some(target_total));
            }
            Action::StealBuild { table_index, target_total, steal_from } => {
                let Some(stolen) = self.players[steal_from].captured.pop() else {
                    return Err(ActionError::EmptyPile(steal_from).into());
                };
                let paired = self.table.loose.remove(table_index);
                self.table.builds.push(Build::new(vec![stolen, paired], target_total));
                self.record(
                    Some(seat),
                    MoveVerb::Steal { from: steal_from },
                    vec![stolen, paired],
                    Some(target_total),
                );
            }
        }
        debug!(seat, kind = action.kind().label(), %action, "applied action");
        Ok(())
    }

    /// Pick a uniformly random legal move for `seat` using the game's RNG.
    pub fn random_legal_move(&mut self, seat: usize) -> Option<Action> {
        let moves = self.legal_moves(seat);
        if moves.is_empty() {
            return None;
        }
        let i = self.rng.random_range(0..moves.len());
        Some(moves[i])
    }

    /// Move to the next seat, then deal the stock if every hand is empty.
    ///
    /// Seats are never skipped; a caller that finds no legal move simply
    /// advances without applying anything.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.turns += 1;
        self.deal_second_round();
    }

    fn deal_second_round(&mut self) {
        if !self.player_count.has_stock() || self.stock.is_empty() {
            return;
        }
        if self.players.iter().any(|p| !p.hand.is_empty()) {
            return;
        }
        let hand_size = self.player_count.hand_size();
        for p in &mut self.players {
            p.hand = self.stock.draw_n(hand_size);
        }
        debug!(stock = self.stock.len(), "second deal");
        self.record(None, MoveVerb::SecondDeal, Vec::new(), None);
    }

    /// True once every hand and the stock are empty.
    pub fn is_over(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty()) && self.stock.is_empty()
    }

    /// Give every card left on the table to the last player who captured.
    ///
    /// With no capture in the whole match the cards are set aside as
    /// abandoned instead. A no-op once the table is empty.
    pub fn collect_remaining_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let cards = self.table.drain_all();
        match self.last_capturer {
            Some(seat) => {
                debug!(seat, count = cards.len(), "sweeping table to last capturer");
                self.players[seat].captured.extend_from_slice(&cards);
                self.record(Some(seat), MoveVerb::Sweep, cards, None);
            }
            None => {
                debug!(count = cards.len(), "no capture this match; table cards abandoned");
                self.abandoned.extend_from_slice(&cards);
                self.record(None, MoveVerb::Sweep, cards, None);
            }
        }
    }

    /// Final score per seat.
    pub fn score(&self) -> Vec<u32> {
        self.score_breakdowns().iter().map(ScoreBreakdown::total).collect()
    }

    pub fn score_breakdowns(&self) -> Vec<ScoreBreakdown> {
        self.players.iter().map(|p| score_pile(&p.captured)).collect()
    }
}

fn check_hand(index: usize, len: usize) -> Result<(), ActionError> {
    if index < len {
        Ok(())
    } else {
        Err(ActionError::HandIndex { index, len })
    }
}

fn check_table(index: usize, len: usize) -> Result<(), ActionError> {
    if index < len {
        Ok(())
    } else {
        Err(ActionError::TableIndex { index, len })
    }
}

impl<R> Game<R> {
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the seat whose turn it is
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Cards held back for the 2-player second deal
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn last_capturer(&self) -> Option<usize> {
        self.last_capturer
    }

    pub fn abandoned(&self) -> &[Card] {
        &self.abandoned
    }

    /// Number of turn advances so far, passes included
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Summary of the table: loose cards and builds.
    pub fn table_state_text(&self) -> String {
        self.table.to_string()
    }

    /// Every card in every zone: hands, table, builds, captured piles,
    /// stock and abandoned cards.
    pub fn card_census(&self) -> Vec<Card> {
        let mut out = Vec::with_capacity(crate::deck::DECK_SIZE);
        for p in &self.players {
            out.extend_from_slice(&p.hand);
            out.extend_from_slice(&p.captured);
        }
        out.extend_from_slice(&self.table.loose);
        for b in &self.table.builds {
            out.extend_from_slice(&b.cards);
        }
        out.extend_from_slice(self.stock.as_slice());
        out.extend_from_slice(&self.abandoned);
        out
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn record(&mut self, seat: Option<usize>, verb: MoveVerb, cards: Vec<Card>, total: Option<u8>) {
        self.history.push(HistoryEntry { seat, verb, cards, total });
    }
}
