//! Match orchestration: the turn loop between two players.

use crate::engine::{Board, BoardError, GameContext, Mark, MoveOutcome, Outcome, Player};
use crate::players::{MoveProvider, ProviderError};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Errors that end a match abnormally.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// A match needs exactly two move providers.
    #[display("expected 2 players, got {_0}")]
    #[from(ignore)]
    PlayerCount(usize),

    /// A provider returned a position the board rejected.
    ///
    /// Providers are expected to validate before returning, so this is a
    /// logic defect in the provider, not a user-facing condition.
    #[display("{_0}")]
    Board(BoardError),

    /// A provider failed to produce a move.
    #[display("{_0}")]
    Provider(ProviderError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Board(err) => Some(err),
            MatchError::Provider(err) => Some(err),
            MatchError::PlayerCount(_) => None,
        }
    }
}

/// Controller for a single match.
///
/// Owns the board and the ordered player list, and drives the turn loop:
/// fetch a move from the current player, apply it, evaluate the terminal
/// condition, transition the state machine, switch player, until a
/// terminal state is reached.
pub struct Match {
    board: Board,
    players: Vec<Player>,
    current: usize,
    context: GameContext,
}

impl Match {
    /// Creates a match from a board and exactly two move providers.
    ///
    /// Marks are assigned in provider order: the first provider plays X
    /// and moves first, the second plays O. This ordering is a documented
    /// rule of the engine, not an artifact of storage.
    pub fn new(board: Board, providers: Vec<Box<dyn MoveProvider>>) -> Result<Self, MatchError> {
        if providers.len() != Mark::iter().count() {
            return Err(MatchError::PlayerCount(providers.len()));
        }
        let players = Mark::iter()
            .zip(providers)
            .map(|(mark, provider)| Player::new(mark, provider))
            .collect();
        Ok(Self {
            board,
            players,
            current: 0,
            context: GameContext::new(),
        })
    }

    /// Read-only access to the board, e.g. for rendering between turns.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for observer registration before the
    /// match starts.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The active game state.
    pub fn state(&self) -> crate::engine::GameState {
        self.context.state()
    }

    /// Runs the turn loop to completion and returns the outcome.
    ///
    /// Every successful move triggers a move-made notification from the
    /// board, and every transition (turn pass, win, draw) a state-changed
    /// notification, both synchronous and in observer registration order.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, MatchError> {
        info!(size = self.board.size(), "starting match");

        while !self.context.is_game_over() {
            let player = &mut self.players[self.current];
            let mark = player.mark();
            debug_assert_eq!(
                self.context.state().to_move(),
                Some(mark),
                "player rotation must agree with the state machine"
            );

            debug!(player = %player.name(), %mark, "waiting for move");
            let position = player.make_move(&self.board)?;

            self.board.apply_move(position, mark)?;

            match self.board.evaluate_move(mark) {
                MoveOutcome::Win(winner) => self.context.advance(winner, true),
                MoveOutcome::Draw => self.context.mark_draw(),
                MoveOutcome::Continue => self.context.advance(mark, false),
            }
            self.board.notify_state_changed(self.context.state());

            self.current = (self.current + 1) % self.players.len();
        }

        let outcome = self
            .context
            .outcome()
            .expect("loop exits only in a terminal state");
        info!(%outcome, "match finished");
        Ok(outcome)
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("context", &self.context)
            .finish()
    }
}
