//! Game state machine and match outcome.

use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The state of a match.
///
/// `XTurn` and `OTurn` are the non-terminal turn states; `XWon`, `OWon`,
/// and `Draw` are terminal. Exactly one state is active at a time, held
/// by a [`GameContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// X to move.
    XTurn,
    /// O to move.
    OTurn,
    /// X completed a winning line.
    XWon,
    /// O completed a winning line.
    OWon,
    /// The board filled with no winner.
    Draw,
}

impl GameState {
    /// Applies the win/no-win transition after `moving` has moved.
    ///
    /// From a turn state, a winning move goes to the mover's `*Won`
    /// state and a non-winning move passes the turn. Terminal states are
    /// fixed points: calling `next` on them is an idempotent no-op.
    ///
    /// The draw transition is not handled here; the controller enters
    /// [`GameState::Draw`] via [`GameContext::mark_draw`] when the board
    /// fills with no winner.
    pub fn next(self, moving: Mark, has_won: bool) -> GameState {
        match self {
            GameState::XTurn => {
                if has_won {
                    // In correct usage the mover here is always X; the
                    // match keeps the transition total either way.
                    match moving {
                        Mark::X => GameState::XWon,
                        Mark::O => GameState::OWon,
                    }
                } else {
                    GameState::OTurn
                }
            }
            GameState::OTurn => {
                if has_won {
                    match moving {
                        Mark::O => GameState::OWon,
                        Mark::X => GameState::XWon,
                    }
                } else {
                    GameState::XTurn
                }
            }
            terminal => terminal,
        }
    }

    /// Returns true for `XWon`, `OWon`, and `Draw`.
    pub fn is_game_over(self) -> bool {
        matches!(self, GameState::XWon | GameState::OWon | GameState::Draw)
    }

    /// Returns the mark expected to move, or `None` in a terminal state.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            GameState::XTurn => Some(Mark::X),
            GameState::OTurn => Some(Mark::O),
            _ => None,
        }
    }
}

/// Outcome of a finished match, read off the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark that completed a winning line.
    Winner(Mark),
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {mark} wins"),
            Outcome::Draw => write!(f, "It's a draw"),
        }
    }
}

/// Holder of the active [`GameState`].
///
/// A fresh context starts at `XTurn`; X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    state: GameState,
}

impl GameContext {
    /// Creates a context in the initial `XTurn` state.
    pub fn new() -> Self {
        Self {
            state: GameState::XTurn,
        }
    }

    /// Returns the active state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Advances the state machine after `moving` has moved.
    pub fn advance(&mut self, moving: Mark, has_won: bool) {
        let next = self.state.next(moving, has_won);
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }

    /// Enters the `Draw` terminal state from a turn state.
    ///
    /// No transition leads out of a terminal state, so calling this
    /// after the match has been decided does nothing.
    pub fn mark_draw(&mut self) {
        if !self.state.is_game_over() {
            debug!(from = ?self.state, "state transition to draw");
            self.state = GameState::Draw;
        }
    }

    /// Returns true once a terminal state is reached.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Reads the outcome off a terminal state, `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::XWon => Some(Outcome::Winner(Mark::X)),
            GameState::OWon => Some(Outcome::Winner(Mark::O)),
            GameState::Draw => Some(Outcome::Draw),
            GameState::XTurn | GameState::OTurn => None,
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_passes_without_win() {
        assert_eq!(GameState::XTurn.next(Mark::X, false), GameState::OTurn);
        assert_eq!(GameState::OTurn.next(Mark::O, false), GameState::XTurn);
    }

    #[test]
    fn test_winning_move_reaches_won_state() {
        assert_eq!(GameState::XTurn.next(Mark::X, true), GameState::XWon);
        assert_eq!(GameState::OTurn.next(Mark::O, true), GameState::OWon);
    }

    #[test]
    fn test_defensive_cross_branch() {
        // The mover should match the turn state, but the transition
        // stays total if it does not.
        assert_eq!(GameState::XTurn.next(Mark::O, true), GameState::OWon);
        assert_eq!(GameState::OTurn.next(Mark::X, true), GameState::XWon);
    }

    #[test]
    fn test_terminal_states_are_fixed_points() {
        for state in [GameState::XWon, GameState::OWon, GameState::Draw] {
            assert_eq!(state.next(Mark::X, true), state);
            assert_eq!(state.next(Mark::O, false), state);
            assert!(state.is_game_over());
        }
    }

    #[test]
    fn test_to_move_tracks_turn_states() {
        assert_eq!(GameState::XTurn.to_move(), Some(Mark::X));
        assert_eq!(GameState::OTurn.to_move(), Some(Mark::O));
        for state in [GameState::XWon, GameState::OWon, GameState::Draw] {
            assert_eq!(state.to_move(), None);
        }
    }

    #[test]
    fn test_context_starts_at_x_turn() {
        let context = GameContext::new();
        assert_eq!(context.state(), GameState::XTurn);
        assert!(!context.is_game_over());
        assert_eq!(context.outcome(), None);
    }

    #[test]
    fn test_context_draw_only_from_turn_state() {
        let mut context = GameContext::new();
        context.advance(Mark::X, true);
        assert_eq!(context.state(), GameState::XWon);
        context.mark_draw();
        assert_eq!(context.state(), GameState::XWon);

        let mut context = GameContext::new();
        context.mark_draw();
        assert_eq!(context.state(), GameState::Draw);
        assert_eq!(context.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Mark::X).to_string(), "Player X wins");
        assert_eq!(Outcome::Winner(Mark::O).to_string(), "Player O wins");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw");
    }
}
