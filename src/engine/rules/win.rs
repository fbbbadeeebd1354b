//! Win detection: full-line scans over rows, columns, and diagonals.

use super::super::board::Board;
use super::super::position::Position;
use super::super::types::Mark;
use tracing::instrument;

/// Returns the mark holding a complete line, if any.
///
/// All N rows are scanned first, then all N columns, then the main
/// diagonal, then the anti-diagonal. A line wins iff every one of its N
/// cells carries the same non-empty mark; the first winning line found
/// decides. After a single move at most one new winning line can exist,
/// so scan order only affects which equal answer is reported.
#[instrument(skip(board))]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    let n = board.size();

    // Rows
    for row in 0..n {
        if let Some(mark) = line_mark(board, (0..n).map(|col| Position::new(row, col))) {
            return Some(mark);
        }
    }

    // Columns
    for col in 0..n {
        if let Some(mark) = line_mark(board, (0..n).map(|row| Position::new(row, col))) {
            return Some(mark);
        }
    }

    // Main diagonal
    if let Some(mark) = line_mark(board, (0..n).map(|i| Position::new(i, i))) {
        return Some(mark);
    }

    // Anti-diagonal
    line_mark(board, (0..n).map(|i| Position::new(i, n - 1 - i)))
}

/// Returns the common mark of a line, or `None` if any cell is empty or
/// the marks differ.
fn line_mark(board: &Board, mut line: impl Iterator<Item = Position>) -> Option<Mark> {
    let first = line.next().and_then(|pos| board.cell(pos)?.mark())?;
    for pos in line {
        if board.cell(pos)?.mark() != Some(first) {
            return None;
        }
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, positions: &[(usize, usize)], mark: Mark) {
        for &(row, col) in positions {
            board.apply_move(Position::new(row, col), mark).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_winner_each_row() {
        for row in 0..3 {
            let mut board = Board::new(3).unwrap();
            fill(&mut board, &[(row, 0), (row, 1), (row, 2)], Mark::X);
            assert_eq!(winning_mark(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_winner_each_column() {
        for col in 0..3 {
            let mut board = Board::new(3).unwrap();
            fill(&mut board, &[(0, col), (1, col), (2, col)], Mark::O);
            assert_eq!(winning_mark(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, &[(0, 0), (1, 1), (2, 2)], Mark::X);
        assert_eq!(winning_mark(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, &[(0, 2), (1, 1), (2, 0)], Mark::O);
        assert_eq!(winning_mark(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, &[(0, 0), (0, 1)], Mark::X);
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_order_independent_within_line() {
        // Same winning row, different cell filled last.
        for last in 0..3 {
            let mut board = Board::new(3).unwrap();
            for col in (0..3).filter(|&c| c != last) {
                board.apply_move(Position::new(2, col), Mark::X).unwrap();
            }
            assert_eq!(winning_mark(&board), None);
            board.apply_move(Position::new(2, last), Mark::X).unwrap();
            assert_eq!(winning_mark(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_size_one_board_wins_immediately() {
        let mut board = Board::new(1).unwrap();
        fill(&mut board, &[(0, 0)], Mark::X);
        assert_eq!(winning_mark(&board), Some(Mark::X));
    }

    #[test]
    fn test_four_by_four_requires_full_line() {
        let mut board = Board::new(4).unwrap();
        fill(&mut board, &[(1, 0), (1, 1), (1, 2)], Mark::O);
        assert_eq!(winning_mark(&board), None);
        fill(&mut board, &[(1, 3)], Mark::O);
        assert_eq!(winning_mark(&board), Some(Mark::O));
    }
}
