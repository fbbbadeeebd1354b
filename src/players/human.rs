//! Interactive move provider: line-oriented coordinate input.

use super::{LineSource, MoveProvider, ProviderError};
use crate::engine::{Board, Position};
use std::io::Write;
use tracing::debug;

/// Move provider that reads coordinates from a line source.
///
/// Each turn it renders the board, prompts for `row col`, and parses two
/// whitespace-separated non-negative integers. Malformed input or an
/// invalid move produces a diagnostic and a re-prompt, indefinitely;
/// blocking on a slow human is intended behavior, not a fault. The only
/// errors it returns are the source closing or an I/O failure.
pub struct HumanProvider<S, W> {
    name: String,
    source: S,
    output: W,
}

impl<S: LineSource, W: Write> HumanProvider<S, W> {
    /// Creates a provider reading from `source` and prompting on `output`.
    pub fn new(name: impl Into<String>, source: S, output: W) -> Self {
        Self {
            name: name.into(),
            source,
            output,
        }
    }
}

impl<S: LineSource, W: Write> MoveProvider for HumanProvider<S, W> {
    fn propose(&mut self, board: &Board) -> Result<Position, ProviderError> {
        let limit = board.size();
        loop {
            writeln!(self.output, "{}", board.render())?;
            writeln!(
                self.output,
                "{}, enter your move (row and column in 0..{limit}, separated by a space):",
                self.name
            )?;
            self.output.flush()?;

            let Some(line) = self.source.read_line()? else {
                return Err(ProviderError::InputClosed);
            };

            let Some(position) = parse_coordinates(&line) else {
                debug!(player = %self.name, input = %line, "malformed move input");
                writeln!(
                    self.output,
                    "Invalid input. Please enter two non-negative numbers, row then column."
                )?;
                continue;
            };

            if board.is_valid_move(position) {
                debug!(player = %self.name, %position, "move accepted");
                return Ok(position);
            }
            writeln!(self.output, "Invalid move. Try again.")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses `row col` as two whitespace-separated non-negative integers.
fn parse_coordinates(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}
