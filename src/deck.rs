use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 40;

/// The 40-card deck: Ace through Ten in each of the four suits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use casino_rs::deck::Deck;
    ///
    /// let deck = Deck::forty();
    /// assert_eq!(deck.len(), 40);
    /// ```
    pub fn forty() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// An empty deck, used as the stock of the 3-player variant.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn forty_card_deck_is_unique() {
        let d = Deck::forty();
        assert_eq!(d.len(), 40);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 40);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::forty();
        let mut d2 = Deck::forty();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::forty());
    }

    #[test]
    fn draw_reduces_length_and_stops_when_empty() {
        let mut d = Deck::forty();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 38);
        assert_eq!(d.draw_n(10).len(), 10);
        assert_eq!(d.draw_n(50).len(), 28);
        assert!(d.is_empty());
        assert!(d.draw().is_none());
    }
}
