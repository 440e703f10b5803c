//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices forming a line.
pub type Line = [usize; 3];

/// Winning combinations, in the order they are evaluated.
pub const LINES: [Line; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Mark filling the line.
    pub mark: Mark,
    /// Indices of the line.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Lines are tested in [`LINES`] order and the first complete one is
/// reported, so the result is deterministic even on boards with two
/// complete lines.
#[instrument]
pub fn check_win(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Some(Square::Occupied(mark)) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

/// Finds the empty cell that would complete a line for `mark`.
///
/// Returns the empty cell of the first line holding exactly two of `mark`
/// and one empty cell.
#[instrument]
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.holds(i, mark)).count();
        let empty = line.iter().filter(|&&i| board.is_empty(i)).count();
        if owned == 2 && empty == 1 {
            line.iter().copied().find(|&i| board.is_empty(i))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let win = check_win(&board("XXX|OO.|...")).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.line, [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let win = check_win(&board("X.O|XO.|O.X")).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line, [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_win(&board("XX.|...|...")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_win(&board("XXO|...|...")), None);
    }

    #[test]
    fn test_first_declared_line_reported() {
        // Row 0 and column 0 both complete; rows come first.
        let win = check_win(&board("XXX|XOO|XOO")).unwrap();
        assert_eq!(win.line, [0, 1, 2]);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut squares = [Square::Empty; 9];
            for i in line {
                squares[i] = Square::Occupied(Mark::O);
            }
            let win = check_win(&Board::from_squares(squares)).unwrap();
            assert_eq!(win, Win { mark: Mark::O, line });
        }
    }

    #[test]
    fn test_completing_cell_finds_gap() {
        assert_eq!(find_completing_cell(&board("OO.|XX.|..."), Mark::O), Some(2));
        assert_eq!(find_completing_cell(&board("OO.|XX.|..."), Mark::X), Some(5));
    }

    #[test]
    fn test_completing_cell_ignores_blocked_lines() {
        assert_eq!(find_completing_cell(&board("OOX|...|..."), Mark::O), None);
    }

    #[test]
    fn test_completing_cell_middle_gap() {
        assert_eq!(find_completing_cell(&board("X.X|...|..."), Mark::X), Some(1));
    }
}
