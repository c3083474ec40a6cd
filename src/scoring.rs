//! End-of-match scoring of captured piles.

use crate::cards::{Card, Rank, Suit};

/// Pile size that is a majority of the 40-card deck.
pub const CARD_MAJORITY: usize = 21;

const TWO_OF_SPADES: Card = Card::new(Rank::Two, Suit::Spades);
const TEN_OF_DIAMONDS: Card = Card::new(Rank::Ten, Suit::Diamonds);

/// Points earned by one captured pile, term by term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub aces: u32,
    pub two_of_spades: u32,
    pub ten_of_diamonds: u32,
    pub spades: u32,
    pub spade_bonus: u32,
    pub cards: usize,
    pub card_bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.aces + self.two_of_spades + self.ten_of_diamonds + self.spade_bonus + self.card_bonus
    }
}

/// Score a captured pile.
///
/// ```
/// use casino_rs::cards::parse_cards;
/// use casino_rs::scoring::score_pile;
///
/// let pile = parse_cards("AS AH 2S 10D").unwrap();
/// assert_eq!(score_pile(&pile).total(), 4);
/// ```
pub fn score_pile(pile: &[Card]) -> ScoreBreakdown {
    let aces = pile.iter().filter(|c| c.rank() == Rank::Ace).count() as u32;
    let spades = pile.iter().filter(|c| c.suit() == Suit::Spades).count() as u32;
    let spade_bonus = match spades {
        s if s >= 6 => 2,
        5 => 1,
        _ => 0,
    };
    ScoreBreakdown {
        aces,
        two_of_spades: u32::from(pile.contains(&TWO_OF_SPADES)),
        ten_of_diamonds: u32::from(pile.contains(&TEN_OF_DIAMONDS)),
        spades,
        spade_bonus,
        cards: pile.len(),
        card_bonus: u32::from(pile.len() >= CARD_MAJORITY),
    }
}
