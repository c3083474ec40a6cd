use crate::cards::{Card, Suit};
use crate::game::{HistoryEntry, Player};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let game = &app.game;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(6), // table
            Constraint::Min(7),    // seats
            Constraint::Length(9), // moves
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let seed = match app.config.seed {
        Some(s) => s.to_string(),
        None => "random".to_string(),
    };
    let last_capturer = match game.last_capturer() {
        Some(seat) => format!("P{}", seat + 1),
        None => "none".to_string(),
    };
    let header_lines = vec![
        Line::from(format!(
            "Players: {}   Seed: {seed}   Turn: {}   Stock: {}",
            game.num_players(),
            game.turns() + 1,
            game.stock_len()
        )),
        Line::from(format!(
            "To act: P{}   Last capturer: {last_capturer}   Abandoned: {}",
            game.current() + 1,
            game.abandoned().len()
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("casino-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_felt(f, chunks[1], app);

    let seat_areas = columns(inner(chunks[2]), game.num_players());
    f.render_widget(Block::default().title("Seats").borders(Borders::ALL), chunks[2]);
    for (idx, p) in game.players().iter().enumerate() {
        if let Some(area) = seat_areas.get(idx) {
            render_seat(f, *area, app, idx, p);
        }
    }

    draw_moves(f, chunks[3], app);

    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = if game.is_over() {
        vec![Line::from(final_line(app))]
    } else if app.human_to_act() {
        vec![Line::from("Your turn: ↑/↓ choose, Enter play, P pass when stuck")]
    } else {
        vec![Line::from(format!(
            "Waiting on P{} ({})   Focus: P{}",
            game.current() + 1,
            app.seat_label(game.current()),
            app.focus + 1
        ))]
    };
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![
        Line::from("S step • F finish • N new match"),
        Line::from("? help • H history • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn final_line(app: &AppState) -> String {
    let scores = app.game.score();
    let best = scores.iter().copied().max().unwrap_or(0);
    let parts: Vec<String> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| if *s == best { format!("P{}: {s}*", i + 1) } else { format!("P{}: {s}", i + 1) })
        .collect();
    format!("Game over. {}", parts.join("  "))
}

fn draw_felt(f: &mut Frame, area: Rect, app: &AppState) {
    let table = app.game.table();
    let block = Block::default().title("Table").borders(Borders::ALL);
    let mut loose: Vec<Span> = vec![Span::raw("Loose:  ")];
    if table.loose().is_empty() {
        loose.push(Span::styled("(none)", Style::default().add_modifier(Modifier::DIM)));
    }
    for (i, c) in table.loose().iter().enumerate() {
        loose.push(Span::styled(format!("#{i} "), Style::default().add_modifier(Modifier::DIM)));
        loose.push(card_span(*c));
        loose.push(Span::raw("  "));
    }
    let mut builds: Vec<Span> = vec![Span::raw("Builds: ")];
    if table.builds().is_empty() {
        builds.push(Span::styled("(none)", Style::default().add_modifier(Modifier::DIM)));
    }
    for (i, b) in table.builds().iter().enumerate() {
        builds.push(Span::styled(format!("#{i} "), Style::default().add_modifier(Modifier::DIM)));
        builds.push(Span::styled(
            format!("[{}] ", b.total()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        for c in b.cards() {
            builds.push(card_span(*c));
            builds.push(Span::raw(" "));
        }
        builds.push(Span::raw(" "));
    }
    let para = Paragraph::new(vec![Line::from(loose), Line::from(""), Line::from(builds)])
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(para, area);
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, idx: usize, p: &Player) {
    let game = &app.game;
    let mut title = format!("{} [{}]", p.name(), app.seat_label(idx));
    if idx == app.focus {
        title.push_str(" [Focus]");
    }
    if game.last_capturer() == Some(idx) {
        title.push_str(" [Last]");
    }
    if idx == game.current() && !game.is_over() {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if game.is_over() {
        let scores = game.score();
        let best = scores.iter().copied().max().unwrap_or(0);
        if scores.get(idx) == Some(&best) {
            block = block.border_style(Style::default().fg(Color::Green));
        }
    } else if idx == game.current() && idx == app.focus {
        block = block.border_style(Style::default().fg(Color::Magenta));
    } else if idx == game.current() {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if idx == app.focus {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines: Vec<Line> = Vec::with_capacity(5);
    let show_hand = idx == app.focus || game.is_over();
    if show_hand {
        let mut spans: Vec<Span> = vec![Span::raw("Hand: ")];
        if p.hand().is_empty() {
            spans.push(Span::styled("(empty)", dim));
        }
        for (i, c) in p.hand().iter().enumerate() {
            spans.push(Span::styled(format!("{i}:"), dim));
            spans.push(card_span(*c));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::from(format!("Hand: {} cards", p.hand().len())));
    }
    lines.push(Line::from(format!("Captured: {}", p.captured().len())));
    let top = match p.top_capture() {
        Some(c) => vec![Span::raw("Top: "), card_span(c)],
        None => vec![Span::raw("Top: "), Span::styled("--", dim)],
    };
    lines.push(Line::from(top));
    let breakdowns = game.score_breakdowns();
    if let Some(b) = breakdowns.get(idx) {
        lines.push(Line::from(format!(
            "Score: {}  (A{} S{} bonus {}+{})",
            b.total(),
            b.aces,
            b.spades,
            b.spade_bonus,
            b.card_bonus
        )));
    }
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_moves(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.game;
    let seat = game.current();
    let moves = if game.is_over() { Vec::new() } else { game.legal_moves(seat) };
    let title = format!("Moves for P{} ({})", seat + 1, moves.len());
    let block = Block::default().title(title).borders(Borders::ALL);
    if moves.is_empty() {
        let msg = if game.is_over() { "Match finished." } else { "No legal moves: pass." };
        f.render_widget(Paragraph::new(msg).block(block), area);
        return;
    }
    let selectable = app.human_to_act();
    let items: Vec<ListItem> = moves
        .iter()
        .enumerate()
        .map(|(i, m)| ListItem::new(format!("{i:>2}: {m}")))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if selectable {
        state.select(Some(app.move_index.min(moves.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn history_line(entry: &HistoryEntry) -> String {
    let who = match entry.seat {
        Some(seat) => format!("P{}", seat + 1),
        None => "Table".to_string(),
    };
    let cards: Vec<String> = entry.cards.iter().map(Card::to_string).collect();
    let total = entry.total.map(|t| format!(" = {t}")).unwrap_or_default();
    format!("{who} {}: {}{total}", entry.verb.label(), cards.join(" "))
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        lines.extend(entries.iter().map(|e| Line::from(history_line(e))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Up / Down: choose a move"),
        Line::from("- Enter: play the chosen move"),
        Line::from("- P: pass (only with no legal move)"),
        Line::from("- S: play one random move for the seat to act"),
        Line::from("- F: finish the match with random moves"),
        Line::from("- N: new match with the same settings"),
        Line::from("- ] / [: focus next / prev"),
        Line::from("- 1-3: focus seat"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Scoring:", bold)),
        Line::from("- Ace 1 each, 2♠ 1, 10♦ 1"),
        Line::from("- Spades: 6+ scores 2, exactly 5 scores 1"),
        Line::from("- 21+ captured cards: 1"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: deal"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn card_span(c: Card) -> Span<'static> {
    let (glyph, style) = suit_glyph_and_style(c.suit());
    Span::styled(format!("{}{glyph}", c.rank().label()), style.add_modifier(Modifier::BOLD))
}
