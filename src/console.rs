//! Console event listener.

use crate::engine::{GameObserver, GameState, Mark, Position};
use std::io::Write;

/// Observer that prints one line per game event to a writer.
///
/// This is the reference listener for console play; tests can point it
/// at a buffer instead of stdout.
pub struct ConsoleObserver<W> {
    output: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_move_made(&mut self, position: Position, mark: Mark) {
        // Observer callbacks have nowhere to report I/O failure; a broken
        // pipe here should not take the match down.
        let _ = writeln!(self.output, "Move made at {position} by player {mark}");
    }

    fn on_state_changed(&mut self, state: GameState) {
        let _ = writeln!(self.output, "Game state changed to {state:?}");
    }
}
