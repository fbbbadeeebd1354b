//! Core domain types: player marks and board cells.

use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
///
/// `Empty` is the only value treated as unoccupied by move validation;
/// once a cell is `Marked` it stays that way for the rest of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell occupied by a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns true if the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
