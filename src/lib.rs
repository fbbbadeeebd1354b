//! Tactix - a turn-based tic-tac-toe engine.
//!
//! The engine tracks whose turn it is, validates and applies moves to an
//! N×N grid, detects wins and draws, and drives the state machine from
//! move outcomes. Move selection is delegated to pluggable
//! [`MoveProvider`]s (interactive or scripted), and registered
//! [`GameObserver`]s are notified of every move and state change.
//!
//! # Example
//!
//! ```
//! use tactix::{Board, Mark, Match, Outcome, Position, ScriptedProvider};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board = Board::new(3)?;
//! // First provider plays X, second plays O.
//! let x = ScriptedProvider::new("X", [(0, 0), (0, 1), (0, 2)].map(Position::from));
//! let o = ScriptedProvider::new("O", [(1, 0), (1, 1)].map(Position::from));
//!
//! let mut game = Match::new(board, vec![Box::new(x), Box::new(o)])?;
//! assert_eq!(game.run()?, Outcome::Winner(Mark::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod engine;
mod orchestrator;
mod players;

// Crate-level exports - engine types
pub use engine::{
    Board, BoardError, Cell, GameContext, GameObserver, GameState, Mark, MoveOutcome,
    ObserverHandle, Outcome, Player, Position,
};

// Crate-level exports - move providers
pub use players::{
    HumanProvider, LineSource, MoveProvider, ProviderError, ScriptedProvider, StdinSource,
};

// Crate-level exports - match orchestration
pub use orchestrator::{Match, MatchError};

// Crate-level exports - console event listener
pub use console::ConsoleObserver;
