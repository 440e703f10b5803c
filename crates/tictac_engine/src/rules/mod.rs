//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the game
//! state so the opponent can reuse them on board snapshots.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{LINES, Line, Win, check_win, find_completing_cell};
