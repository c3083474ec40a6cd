use crate::cards::{join_labels, Card};
use std::fmt;

/// A sealed group of cards with a declared total.
///
/// The total is checked when the build is proposed, never afterwards; the
/// cards leave the table together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    pub(crate) cards: Vec<Card>,
    pub(crate) total: u8,
}

impl Build {
    pub fn new(cards: Vec<Card>, total: u8) -> Self {
        Self { cards, total }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total(&self) -> u8 {
        self.total
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.total, join_labels(&self.cards, "+", ""))
    }
}

/// The shared area: loose cards plus builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub(crate) loose: Vec<Card>,
    pub(crate) builds: Vec<Build>,
}

impl Table {
    pub fn loose(&self) -> &[Card] {
        &self.loose
    }

    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    pub fn is_empty(&self) -> bool {
        self.loose.is_empty() && self.builds.is_empty()
    }

    /// Every card on the table, loose cards first then builds in order.
    pub fn drain_all(&mut self) -> Vec<Card> {
        let mut out = std::mem::take(&mut self.loose);
        for build in self.builds.drain(..) {
            out.extend(build.cards);
        }
        out
    }

    pub fn loose_text(&self) -> String {
        join_labels(&self.loose, " ", "(none)")
    }

    pub fn builds_text(&self) -> String {
        if self.builds.is_empty() {
            return "(none)".to_string();
        }
        self.builds.iter().map(Build::to_string).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loose: {} | Builds: {}", self.loose_text(), self.builds_text())
    }
}
