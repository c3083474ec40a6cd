use casino_rs::config::{MatchConfig, PlayerCount};
use casino_rs::console::ConsoleUi;
use casino_rs::game::Game;
use casino_rs::sim;
use casino_rs::tui::{app::AppState, controller};
use clap::{Parser, ValueEnum};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "casino-rs")]
#[command(about = "Play or simulate the Casino capture card game", version)]
struct Args {
    /// Number of players (2 or 3)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
    players: u8,

    /// Match seed (for reproducible deals and bot choices)
    #[arg(long)]
    seed: Option<u64>,

    /// Frontend to run
    #[arg(short, long, default_value = "tui")]
    mode: Mode,

    /// Matches to play in simulate mode; seeds count up from --seed
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Tui,
    Console,
    Simulate,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run_tui(config: MatchConfig) -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "casino-rs TUI requires a real terminal (TTY).\nTry --mode console or --mode simulate. Version: {}",
            casino_rs::VERSION
        );
        return Ok(());
    }
    let mut app = AppState::default();
    app.cfg_players = config.players;
    app.cfg_seed = config.seed.unwrap_or(0);
    app.apply_menu();
    app.open_menu();

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn run_console(config: MatchConfig) -> io::Result<()> {
    let mut game = Game::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut ui = ConsoleUi::new(&mut game, stdin.lock(), stdout.lock());
    ui.run()?;
    Ok(())
}

fn run_simulate(config: MatchConfig, games: u32) {
    let base = config.resolve_seed();
    let mut wins = vec![0u32; config.players.get()];
    for i in 0..games {
        let seed = base.wrapping_add(u64::from(i));
        let mut game = Game::from_config(&config.with_seed(seed));
        let report = sim::simulate(&mut game);
        let scores: Vec<String> = report
            .scores
            .iter()
            .zip(&report.captured)
            .enumerate()
            .map(|(seat, (s, c))| format!("P{}={s} ({c} cards)", seat + 1))
            .collect();
        println!("seed {seed}: {}", scores.join("  "));
        for seat in report.leaders() {
            wins[seat] += 1;
        }
    }
    if games > 1 {
        let totals: Vec<String> =
            wins.iter().enumerate().map(|(seat, w)| format!("P{}={w}", seat + 1)).collect();
        println!("top scores (ties shared): {}", totals.join("  "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let players = PlayerCount::try_from(usize::from(args.players))?;
    let mut config = MatchConfig::new(players);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    match args.mode {
        Mode::Tui => run_tui(config)?,
        Mode::Console => {
            init_logging(args.verbose);
            info!(players = players.get(), seed = ?config.seed, "starting console match");
            run_console(config)?;
        }
        Mode::Simulate => {
            init_logging(args.verbose);
            info!(players = players.get(), games = args.games, "starting simulation");
            run_simulate(config, args.games);
        }
    }
    Ok(())
}
