use std::fmt;
use std::str::FromStr;

/// Card ranks of the 40-card deck, Ace (1) through Ten (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    /// Numeric value used for captures, builds and totals.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
        }
    }

    pub const fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Four suits in deal order: S, H, D, C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            "clubs" => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use casino_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Diamonds);
/// assert_eq!(card.to_string(), "10D");
/// assert_eq!(card.value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is always the last char, rank is whatever precedes it
        let Some(suit_ch) = t.chars().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Join card labels with a separator, or return `placeholder` when empty.
pub fn join_labels(cards: &[Card], sep: &str, placeholder: &str) -> String {
    if cards.is_empty() {
        return placeholder.to_string();
    }
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(sep)
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use casino_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, 10d 3h").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Three, Suit::Hearts));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("a").unwrap(), Rank::Ace);
        assert!(Rank::from_str("J").is_err());
        assert!(Rank::from_str("11").is_err());
    }

    #[test]
    fn rank_values_round_trip() {
        for r in Rank::ALL {
            assert_eq!(Rank::from_value(r.value()), Some(r));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(11), None);
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::from_str("h").unwrap(), Suit::Hearts);
        assert_eq!(Suit::from_str("Diamonds").unwrap(), Suit::Diamonds);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_labels() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2C");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
    }

    #[test]
    fn card_from_str() {
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert!(Card::from_str("S").is_err());
        assert!(Card::from_str("KS").is_err());
        assert!(Card::from_str("").is_err());
    }

    #[test]
    fn join_labels_uses_placeholder_when_empty() {
        assert_eq!(join_labels(&[], " ", "(none)"), "(none)");
        let xs = parse_cards("AS 3H").unwrap();
        assert_eq!(join_labels(&xs, "+", "-"), "AS+3H");
    }
}
