//! Scripted move provider: replays a fixed move list.

use super::{MoveProvider, ProviderError};
use crate::engine::{Board, Position};
use std::collections::VecDeque;
use tracing::debug;

/// Move provider that plays a predetermined sequence of positions.
///
/// Useful for tests and demos. Moves are returned as scripted, without
/// validation; feeding it an occupied or out-of-range position will
/// surface as an illegal move at the board.
pub struct ScriptedProvider {
    name: String,
    moves: VecDeque<Position>,
}

impl ScriptedProvider {
    /// Creates a provider that plays `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

}

impl MoveProvider for ScriptedProvider {
    fn propose(&mut self, _board: &Board) -> Result<Position, ProviderError> {
        let position = self
            .moves
            .pop_front()
            .ok_or(ProviderError::ScriptExhausted)?;
        debug!(player = %self.name, %position, "scripted move");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
