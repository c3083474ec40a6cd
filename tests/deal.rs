use casino_rs::cards::Card;
use casino_rs::config::{ConfigError, MatchConfig, PlayerCount};
use casino_rs::deck::{Deck, DECK_SIZE};
use casino_rs::game::{Game, GameError, EXCHANGE_CARD};

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

#[test]
fn two_player_deal_shape() {
    let full = sorted(Deck::forty().as_slice().to_vec());
    for seed in 0..20 {
        let g = Game::seeded(2, seed).unwrap();
        assert_eq!(g.num_players(), 2);
        for p in g.players() {
            assert_eq!(p.hand().len(), 10);
            assert!(p.captured().is_empty());
        }
        assert!(g.table().is_empty());
        assert_eq!(g.stock_len(), 20);
        assert_eq!(g.current(), 0);
        assert_eq!(g.last_capturer(), None);
        assert_eq!(g.card_census().len(), DECK_SIZE);
        assert_eq!(sorted(g.card_census()), full);
    }
}

#[test]
fn three_player_deal_puts_three_of_hearts_on_table() {
    // 39 hand cards + 1 starter: either the starter is the 3H or someone
    // holds it and swaps it out
    for seed in 0..40 {
        let g = Game::seeded(3, seed).unwrap();
        assert_eq!(g.stock_len(), 0);
        assert_eq!(g.table().loose(), &[EXCHANGE_CARD]);
        assert!(g.table().builds().is_empty());
        for p in g.players() {
            assert_eq!(p.hand().len(), 13);
            assert!(!p.hand().contains(&EXCHANGE_CARD));
        }
        assert_eq!(g.card_census().len(), DECK_SIZE);
    }
}

#[test]
fn unsupported_player_counts_are_rejected() {
    for n in [0, 1, 4, 7] {
        let err = Game::seeded(n, 1).unwrap_err();
        assert_eq!(err, GameError::InvalidConfiguration(ConfigError::PlayerCount(n)));
    }
}

#[test]
fn same_seed_same_deal() {
    for players in [2, 3] {
        let a = Game::seeded(players, 123).unwrap();
        let b = Game::seeded(players, 123).unwrap();
        assert_eq!(a.players(), b.players());
        assert_eq!(a.table(), b.table());
    }
    let a = Game::seeded(2, 1).unwrap();
    let b = Game::seeded(2, 2).unwrap();
    assert_ne!(a.players(), b.players());
}

#[test]
fn config_seed_matches_seeded_constructor() {
    let cfg = MatchConfig::new(PlayerCount::Three).with_seed(5);
    let from_cfg = Game::from_config(&cfg);
    let seeded = Game::seeded(3, 5).unwrap();
    assert_eq!(from_cfg.players(), seeded.players());
    assert_eq!(from_cfg.player_count(), PlayerCount::Three);
}

#[test]
fn table_text_after_deal() {
    let g = Game::seeded(2, 3).unwrap();
    assert_eq!(g.table_state_text(), "Loose: (none) | Builds: (none)");
    let g = Game::seeded(3, 3).unwrap();
    assert_eq!(g.table_state_text(), "Loose: 3H | Builds: (none)");
}
