//! Tic-tac-toe rules engine and computer opponent.
//!
//! Pure game logic with no I/O:
//!
//! - **Board & rules**: [`Board`], [`check_win`], [`check_draw`]
//! - **Game state**: [`GameState`] applies moves and reports a [`MoveOutcome`]
//! - **Opponent**: [`select_move`] walks a priority-ordered heuristic chain,
//!   gated per turn by a [`Difficulty`] tier
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Difficulty, GameState, Mark, MoveOutcome, select_move};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.apply_move(4), MoveOutcome::Continued { next_turn: Mark::O });
//!
//! let mut rng = rand::rng();
//! let reply = select_move(game.board(), Difficulty::Hard, Mark::O, Mark::X, &mut rng)
//!     .expect("board has empty cells");
//! assert!(game.board().is_empty(reply.index));
//! game.apply_move(reply.index);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod game;
mod rules;
mod selector;
mod types;

pub use difficulty::{Difficulty, Strategy};
pub use game::{GameState, GameStatus, MoveError, MoveOutcome};
pub use rules::{LINES, Line, Win, check_draw, check_win, find_completing_cell};
pub use selector::{
    CENTER, CORNERS, RandomSource, Rule, SIDE_RESPONSES, Selection, TRAP_TABLE, TrapPattern,
    heuristic_move, random_move, select_move,
};
pub use types::{Board, BoardParseError, CELL_COUNT, Mark, Square};
