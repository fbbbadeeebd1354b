//! Move providers: the pluggable capability that chooses moves.

mod human;
mod scripted;

pub use human::HumanProvider;
pub use scripted::ScriptedProvider;

use crate::engine::{Board, Position};
use std::io;

/// Errors a move provider can surface to the controller.
///
/// Malformed or invalid input is never among them: interactive providers
/// absorb it and re-prompt. What remains is the input source going away
/// or a script running dry, both unrecoverable for the match.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ProviderError {
    /// The input source reached end of input.
    #[display("input source closed")]
    InputClosed,

    /// A scripted provider ran out of moves.
    #[display("scripted provider has no moves left")]
    ScriptExhausted,

    /// Reading from the input source failed.
    #[display("input error: {_0}")]
    Io(io::Error),
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Capability that produces the next move for a player.
///
/// `propose` blocks until a position is available; there is no timeout
/// or cancellation. Implementations that take external input own the
/// retry loop for malformed or invalid moves and only return positions
/// they have validated against `board`.
pub trait MoveProvider {
    /// Produces the next move, given read-only access to the board.
    fn propose(&mut self, board: &Board) -> Result<Position, ProviderError>;

    /// Returns the provider's display name.
    fn name(&self) -> &str;
}

/// Blocking source of input lines for interactive providers.
///
/// This replaces a globally shared input reader with a passed-in
/// capability, so the interactive provider can be driven by stdin in
/// production and by a buffer in tests.
pub trait LineSource {
    /// Reads the next line, without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: io::BufRead> LineSource for R {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::BufRead::read_line(self, &mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Stdin as a line source.
///
/// Safe to hand to both players of a console match: each read locks the
/// shared stdin handle for a single line only.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
