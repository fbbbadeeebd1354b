//! Game event observers.

use super::position::Position;
use super::state::GameState;
use super::types::Mark;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a registered observer.
///
/// Handles are compared by pointer identity for removal, so the same
/// handle must be used for `add_observer` and `remove_observer`.
pub type ObserverHandle = Rc<RefCell<dyn GameObserver>>;

/// Receiver of board events.
///
/// Callbacks are invoked synchronously, in registration order, from
/// inside the engine. An observer must not mutate the board from within
/// a callback; re-entrant notification is not supported.
pub trait GameObserver {
    /// A mark was placed at `position`.
    fn on_move_made(&mut self, position: Position, mark: Mark);

    /// The game state machine transitioned to `state`.
    fn on_state_changed(&mut self, state: GameState);
}
