//! Line-oriented console play: one human picks every move by number.

use crate::action::Action;
use crate::cards::Card;
use crate::engine::GameEngine;
use std::io::{self, BufRead, Write};

pub struct ConsoleUi<'a, I, O> {
    engine: &'a mut dyn GameEngine,
    input: I,
    output: O,
}

impl<'a, I: BufRead, O: Write> ConsoleUi<'a, I, O> {
    pub fn new(engine: &'a mut dyn GameEngine, input: I, output: O) -> Self {
        Self { engine, input, output }
    }

    /// Play until the match is over, then sweep and print the scores.
    ///
    /// Fails with `UnexpectedEof` if input runs out before the match ends.
    pub fn run(&mut self) -> io::Result<Vec<u32>> {
        while !self.engine.is_over() {
            let seat = self.engine.current();
            writeln!(self.output, "\n{}", "=".repeat(60))?;
            writeln!(self.output, "Table: {}", self.engine.table_state_text())?;
            let (name, hand) = match self.engine.player(seat) {
                Some(p) => (p.name().to_string(), hand_display(p.hand())),
                None => (format!("P{}", seat + 1), String::new()),
            };
            writeln!(self.output, "{name} hand: {hand}")?;
            let moves = self.engine.legal_moves(seat);
            if moves.is_empty() {
                writeln!(self.output, "No legal moves available. Passing.")?;
                self.engine.advance_turn();
                continue;
            }
            let action = self.prompt_for_action(&moves)?;
            if let Err(err) = self.engine.apply_action(seat, action) {
                writeln!(self.output, "Rejected: {err}")?;
                continue;
            }
            self.engine.advance_turn();
        }

        self.engine.collect_remaining_table();
        let scores = self.engine.score();
        writeln!(self.output, "\nGame over.")?;
        for (seat, score) in scores.iter().enumerate() {
            if let Some(p) = self.engine.player(seat) {
                writeln!(
                    self.output,
                    "{} captured {} cards, score: {score}",
                    p.name(),
                    p.captured().len()
                )?;
            }
        }
        Ok(scores)
    }

    fn prompt_for_action(&mut self, moves: &[Action]) -> io::Result<Action> {
        writeln!(self.output, "Available moves:")?;
        for (idx, action) in moves.iter().enumerate() {
            writeln!(self.output, "  {idx}: {action}")?;
        }
        loop {
            write!(self.output, "Choose move #: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }
            match line.trim().parse::<usize>() {
                Ok(i) if i < moves.len() => return Ok(moves[i]),
                _ => writeln!(self.output, "Invalid selection.")?,
            }
        }
    }
}

fn hand_display(hand: &[Card]) -> String {
    hand.iter().enumerate().map(|(i, c)| format!("[{i}] {c}")).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn hand_display_numbers_cards() {
        let hand = parse_cards("AS 10D").unwrap();
        assert_eq!(hand_display(&hand), "[0] AS [1] 10D");
        assert_eq!(hand_display(&[]), "");
    }
}
