use casino_rs::config::PlayerCount;
use casino_rs::tui::app::{AppState, InputAction, Scene};

fn setup_table_app() -> AppState {
    let mut app = AppState::default();
    app.cfg_seed = 12;
    app.cfg_bot_delay_ms = 0;
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn menu_switches_to_three_players() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_players, PlayerCount::Three);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.game.num_players(), 3);
    assert_eq!(app.game.table().loose().len(), 1);
    assert_eq!(app.seat_label(0), "You");
    assert_eq!(app.seat_label(2), "Bot");
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn pass_refused_while_moves_exist() {
    let mut app = setup_table_app();
    assert!(app.human_to_act());
    assert!(!app.handle_input(InputAction::Pass));
    assert!(app.action_error().is_some());
    assert_eq!(app.game.current(), 0);
}

#[test]
fn step_and_new_match() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::StepRandom));
    assert_eq!(app.game.turns(), 1);
    let _ = app.handle_input(InputAction::NewMatch);
    assert_eq!(app.game.turns(), 0);
    assert_eq!(app.game.player(0).unwrap().hand().len(), 10);
}

#[test]
fn move_selection_wraps() {
    let mut app = setup_table_app();
    let n = app.game.legal_moves(app.game.current()).len();
    assert!(n > 0);
    let _ = app.handle_input(InputAction::MovePrev);
    assert_eq!(app.move_index, n - 1);
    let _ = app.handle_input(InputAction::MoveNext);
    assert_eq!(app.move_index, 0);
}

#[test]
fn focus_wraps_across_seats() {
    let mut app = setup_table_app();
    let n = app.game.num_players();
    assert!(n >= 2);
    app.focus = n - 1;
    let _ = app.handle_input(InputAction::FocusNext);
    assert_eq!(app.focus, 0);
    let _ = app.handle_input(InputAction::FocusPrev);
    assert_eq!(app.focus, n - 1);
}
