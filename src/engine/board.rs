//! Board storage, move validation, terminal evaluation, observer fan-out.

use super::observer::ObserverHandle;
use super::position::Position;
use super::rules;
use super::state::GameState;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Errors raised by board construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("board size must be at least 1")]
    InvalidSize,

    /// The target cell is occupied or out of range.
    ///
    /// Callers are expected to gate `apply_move` behind `is_valid_move`,
    /// so seeing this error indicates a logic defect in the caller.
    #[display("illegal move at {_0}")]
    IllegalMove(Position),
}

impl std::error::Error for BoardError {}

/// Terminal evaluation of the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The acting mark completed a winning line.
    Win(Mark),
    /// The board is full with no winning line.
    Draw,
    /// The game continues.
    Continue,
}

/// An N×N grid of cells with an ordered list of event observers.
///
/// The board is exclusively owned by the match controller for the
/// duration of a match. Observers are invoked synchronously, in
/// registration order, and must not mutate the board from within a
/// callback; the engine does not support re-entrant notification.
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    observers: Vec<ObserverHandle>,
}

impl Board {
    /// Creates an all-empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            observers: Vec::new(),
        })
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `position`, or `None` if out of range.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.row < self.size && position.col < self.size {
            Some(self.cells[position.row * self.size + position.col])
        } else {
            None
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if both coordinates are in range and the cell is empty.
    ///
    /// Out-of-range coordinates are not an error, they simply make the
    /// move invalid; callers must branch on the result.
    pub fn is_valid_move(&self, position: Position) -> bool {
        matches!(self.cell(position), Some(Cell::Empty))
    }

    /// Returns true if no empty cells remain.
    pub fn is_full(&self) -> bool {
        rules::draw::is_full(self)
    }

    /// Writes `mark` into the cell at `position`.
    ///
    /// On success every registered observer receives `on_move_made`,
    /// synchronously, before this method returns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] and leaves the board unchanged
    /// if [`is_valid_move`](Self::is_valid_move) would have returned
    /// false at call time.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<(), BoardError> {
        if !self.is_valid_move(position) {
            return Err(BoardError::IllegalMove(position));
        }
        self.cells[position.row * self.size + position.col] = Cell::Marked(mark);
        debug!(%position, %mark, "move applied");
        for observer in &self.observers {
            observer.borrow_mut().on_move_made(position, mark);
        }
        Ok(())
    }

    /// Evaluates the board for a terminal condition after `acting` moved.
    ///
    /// Rows are scanned first, then columns, then the main diagonal, then
    /// the anti-diagonal; the first winning line found decides. The
    /// reported winner is the mark on that line, which under the
    /// one-move-per-turn rule is always the acting mark.
    #[instrument(skip(self))]
    pub fn evaluate_move(&self, acting: Mark) -> MoveOutcome {
        if let Some(winner) = rules::win::winning_mark(self) {
            debug_assert_eq!(
                winner, acting,
                "winning line must belong to the mark that just moved"
            );
            return MoveOutcome::Win(winner);
        }
        if self.is_full() {
            return MoveOutcome::Draw;
        }
        MoveOutcome::Continue
    }

    /// Registers an observer.
    ///
    /// Registrations form an ordered multiset: an observer added twice
    /// receives every notification twice.
    pub fn add_observer(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    /// Removes one registration of `observer`, matched by pointer
    /// identity. Unknown observers are ignored.
    pub fn remove_observer(&mut self, observer: &ObserverHandle) {
        if let Some(idx) = self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            self.observers.remove(idx);
        }
    }

    /// Notifies every registered observer of a state transition.
    ///
    /// Invoked by the match controller after each move is evaluated.
    pub fn notify_state_changed(&self, state: GameState) {
        for observer in &self.observers {
            observer.borrow_mut().on_state_changed(state);
        }
    }

    /// Formats the grid as text, with `|` between columns and `---+---`
    /// rules between rows. Empty cells render as `.`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let glyph = match self.cells[row * self.size + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                out.push_str(&format!(" {glyph} "));
                if col < self.size - 1 {
                    out.push('|');
                }
            }
            out.push('\n');
            if row < self.size - 1 {
                out.push_str(&vec!["---"; self.size].join("+"));
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .field("observers", &self.observers.len())
            .finish()
    }
}
