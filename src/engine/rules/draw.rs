//! Draw detection: a full board with no winner is a draw.

use super::super::board::Board;
use super::super::types::Cell;

/// Returns true if every cell is occupied.
///
/// The controller treats a full board with no winning line as a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
