//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw.
///
/// A full board is a draw only when no line is complete; a full board with
/// a complete line is a win.
#[instrument]
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "XOX|XO.|OXX".parse().unwrap();
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board: Board = "XOX|XOO|OXX".parse().unwrap();
        assert!(check_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX|OOX|XOO".parse().unwrap();
        assert!(board.is_full());
        assert!(!check_draw(&board));
    }
}
