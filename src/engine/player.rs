//! Player identity: a mark bound to a move provider.

use super::board::Board;
use super::position::Position;
use super::types::Mark;
use crate::players::{MoveProvider, ProviderError};

/// A participant in a match: a [`Mark`] paired with the capability that
/// chooses its moves.
pub struct Player {
    mark: Mark,
    provider: Box<dyn MoveProvider>,
}

impl Player {
    /// Binds `mark` to a move provider.
    pub fn new(mark: Mark, provider: Box<dyn MoveProvider>) -> Self {
        Self { mark, provider }
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the provider's display name.
    pub fn name(&self) -> &str {
        self.provider.name()
    }

    /// Asks the provider for the next move, given read-only board access.
    ///
    /// Blocks until the provider produces a position. Interactive
    /// providers own their retry loop, so a returned position is already
    /// valid for `board` in correct use.
    pub fn make_move(&mut self, board: &Board) -> Result<Position, ProviderError> {
        self.provider.propose(board)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("mark", &self.mark)
            .field("provider", &self.provider.name())
            .finish()
    }
}
