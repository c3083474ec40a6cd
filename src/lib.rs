//! casino-rs: rules engine for the Casino capture card game
//!
//! Goals:
//! - A 40-card game (Ace through Ten, four suits) for two or three players
//! - Legal-move generation and validated move application
//! - Reproducible matches from a seed; no panics for invalid input
//!
//! ## Quick start: play a seeded match with random moves
//! ```
//! use casino_rs::game::Game;
//! use casino_rs::sim;
//!
//! let mut game = Game::seeded(2, 42).unwrap();
//! let report = sim::simulate(&mut game);
//! assert!(game.is_over());
//! assert!(game.table().is_empty());
//! assert_eq!(report.scores.len(), 2);
//! ```
//!
//! ## Frontends
//! Run the interactive TUI, the line console or a batch simulation with:
//! ```sh
//! cargo run --bin casino-rs -- --mode tui
//! cargo run --bin casino-rs -- --mode console --players 3
//! cargo run --bin casino-rs -- --mode simulate --seed 7
//! ```

pub mod action;
pub mod agents;
pub mod cards;
pub mod config;
pub mod console;
pub mod deck;
pub mod engine;
pub mod game;
pub mod scoring;
pub mod sim;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
