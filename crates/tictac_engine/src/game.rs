//! Game state machine for tic-tac-toe.
//!
//! A [`GameState`] moves forward only: `InProgress` becomes `Won` or `Draw`
//! through [`GameState::apply_move`], and nothing leaves a finished game
//! except [`GameState::reset`].

use crate::rules::{Line, check_draw, check_win};
use crate::types::{Board, CELL_COUNT, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Result of applying a move, for the caller to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, game continues with `next_turn` to move.
    Continued {
        /// Mark that moves next.
        next_turn: Mark,
    },
    /// Mark placed and completed a line.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Completed line.
        line: Line,
    },
    /// Mark placed and filled the board without a line.
    Draw,
    /// Move rejected; state unchanged.
    Invalid(MoveError),
}

impl MoveOutcome {
    /// Returns true if a mark was placed.
    pub fn is_placed(&self) -> bool {
        !matches!(self, MoveOutcome::Invalid(_))
    }

    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Draw)
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
    status: GameStatus,
    /// Indices played, in order.
    moves: Vec<usize>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the indices played so far.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Returns true while moves can be made.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns the winner of a won game.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Rejected moves leave the state untouched and come back as
    /// [`MoveOutcome::Invalid`]. Otherwise the board is evaluated for a win,
    /// then a draw, and the turn passes only if the game continues.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if !self.is_active() {
            debug!("Move after game over ignored");
            return MoveOutcome::Invalid(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            debug!("Move out of bounds ignored");
            return MoveOutcome::Invalid(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            debug!("Move on occupied square ignored");
            return MoveOutcome::Invalid(MoveError::SquareOccupied(index));
        }

        let mark = self.turn;
        self.board.place(index, mark);
        self.moves.push(index);

        if let Some(win) = check_win(&self.board) {
            info!(winner = %win.mark, line = ?win.line, "Game won");
            self.status = GameStatus::Won {
                winner: win.mark,
                line: win.line,
            };
            return MoveOutcome::Won {
                mark: win.mark,
                line: win.line,
            };
        }

        if check_draw(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
            return MoveOutcome::Draw;
        }

        self.turn = mark.opponent();
        MoveOutcome::Continued {
            next_turn: self.turn,
        }
    }

    /// Returns the game to its initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.moves.len(), "Resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_passes_turn() {
        let mut game = GameState::new();
        let outcome = game.apply_move(4);
        assert_eq!(outcome, MoveOutcome::Continued { next_turn: Mark::O });
        assert_eq!(game.turn(), Mark::O);
        assert!(game.board().holds(4, Mark::X));
        assert_eq!(game.moves(), &[4]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = GameState::new();
        game.apply_move(4);
        let before = game.clone();
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Invalid(MoveError::SquareOccupied(4))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Invalid(MoveError::OutOfBounds(9))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4] {
            game.apply_move(index);
        }
        let outcome = game.apply_move(2);
        assert_eq!(
            outcome,
            MoveOutcome::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.winner(), Some(Mark::X));
        assert!(!game.is_active());
    }

    #[test]
    fn test_reset_after_win() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index);
        }
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::SquareOccupied(3).to_string(),
            "Square 3 is already occupied"
        );
    }
}
