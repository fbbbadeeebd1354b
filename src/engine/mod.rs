//! Core game engine: board, rules, state machine, players, observers.

mod board;
mod observer;
mod player;
mod position;
mod rules;
mod state;
mod types;

pub use board::{Board, BoardError, MoveOutcome};
pub use observer::{GameObserver, ObserverHandle};
pub use player::Player;
pub use position::Position;
pub use state::{GameContext, GameState, Outcome};
pub use types::{Cell, Mark};
