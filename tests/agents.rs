use casino_rs::agents::{AgentKind, AgentTable, BotAgent, BotProfile, HumanAgent, Intent, PlayerAgent};
use casino_rs::game::Game;

fn all_bots(n: usize) -> AgentTable {
    let mut table = AgentTable::for_seats(n);
    for seat in 0..n {
        table.set_agent(seat, Some(Box::new(BotAgent::new(BotProfile::default()))));
    }
    table
}

#[test]
fn non_current_seat_is_a_noop() {
    let mut g = Game::seeded(3, 6).unwrap();
    let cur = g.current();
    let other = (cur + 1) % g.num_players();
    let recorded = g.history_len();
    let mut bot = BotAgent::new(BotProfile::default());
    assert!(!bot.on_turn(&mut g, other).unwrap());
    assert_eq!(g.current(), cur);
    assert_eq!(g.history_len(), recorded);
}

#[test]
fn bots_play_a_match_to_the_end() {
    for players in [2, 3] {
        let mut g = Game::seeded(players, 31).unwrap();
        let mut table = all_bots(players);
        assert!(table.any_bots());
        let mut guard = 0;
        while !g.is_over() {
            assert!(table.on_turn(&mut g).unwrap());
            guard += 1;
            assert!(guard < 500, "bots never finished");
        }
        g.collect_remaining_table();
        assert!(g.table().is_empty());
    }
}

#[test]
fn bot_choices_follow_the_game_seed() {
    let play = |seed| {
        let mut g = Game::seeded(2, seed).unwrap();
        let mut table = all_bots(2);
        while !g.is_over() {
            table.on_turn(&mut g).unwrap();
        }
        g.history().to_vec()
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn human_seat_waits_for_intent() {
    let mut g = Game::seeded(2, 4).unwrap();
    let mut table = AgentTable::for_seats(2);
    table.set_agent(0, Some(Box::new(HumanAgent::new())));
    table.set_agent(1, Some(Box::new(BotAgent::new(BotProfile::default()))));
    assert_eq!(table.agent_kind(0), Some(AgentKind::Human));
    assert_eq!(table.agent_kind(1), Some(AgentKind::Bot));

    assert!(!table.on_turn(&mut g).unwrap(), "no intent queued yet");
    assert_eq!(g.current(), 0);

    assert!(table.receive(0, Intent::Play(0)));
    assert!(table.on_turn(&mut g).unwrap());
    assert_eq!(g.current(), 1);
    assert!(table.on_turn(&mut g).unwrap());
    assert_eq!(g.current(), 0);
}
