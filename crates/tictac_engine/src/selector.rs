//! Rule-based move selection for the computer opponent.
//!
//! The heuristic chain is evaluated in strict priority order and the first
//! rule that yields an empty cell wins:
//!
//! 1. complete one of our own lines,
//! 2. block the human's line,
//! 3. answer a known fork setup from [`TRAP_TABLE`],
//! 4. take the center when the human holds a corner,
//! 5. mirror the human's edge when the center is open,
//! 6. play any empty cell at random.
//!
//! Rules 3-5 are fixed responses, not search.

use crate::difficulty::{Difficulty, Strategy};
use crate::rules::find_completing_cell;
use crate::types::{Board, Mark};
use rand::{Rng, RngCore};
use tracing::{debug, instrument, warn};

/// Center cell index.
pub const CENTER: usize = 4;

/// Corners checked by the center response, in order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge cell and the edge played in response, in order.
pub const SIDE_RESPONSES: [(usize, usize); 4] = [(1, 7), (3, 5), (5, 3), (7, 1)];

/// Source of randomness for the opponent.
///
/// Every `rand` generator is a source; tests can supply scripted values.
pub trait RandomSource {
    /// Returns a value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Returns an index in `[0, len)`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn roll(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Two human marks that set up a fork, and the cell that defuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapPattern {
    /// Cells that must both hold the human's mark.
    pub marks: [usize; 2],
    /// Cell the opponent plays in response.
    pub response: usize,
}

impl TrapPattern {
    const fn new(first: usize, second: usize, response: usize) -> Self {
        Self {
            marks: [first, second],
            response,
        }
    }

    /// Returns true if the human holds both cells of the pattern.
    pub fn matches(&self, board: &Board, human: Mark) -> bool {
        self.marks.iter().all(|&i| board.holds(i, human))
    }
}

/// Anti-trap responses, checked in this order.
///
/// Some entries overlap (`8&1` and `1&5` both answer at 2); the order is
/// kept as is because it decides which entry fires on crowded boards.
pub const TRAP_TABLE: [TrapPattern; 10] = [
    TrapPattern::new(0, 8, 5),
    TrapPattern::new(2, 6, 3),
    TrapPattern::new(5, 7, 8),
    TrapPattern::new(1, 3, 0),
    TrapPattern::new(1, 5, 2),
    TrapPattern::new(7, 3, 6),
    TrapPattern::new(8, 1, 2),
    TrapPattern::new(6, 1, 0),
    TrapPattern::new(0, 7, 6),
    TrapPattern::new(2, 7, 8),
];

/// Rule of the heuristic chain that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Completes the opponent's own line.
    Win,
    /// Blocks the human's line.
    Block,
    /// Answers a fork setup from the trap table.
    AntiTrap,
    /// Takes the center against a corner.
    Center,
    /// Mirrors the human's edge.
    SideResponse,
    /// Any empty cell, chosen at random.
    Fallback,
}

/// A chosen cell and how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Board index to play.
    pub index: usize,
    /// Strategy rolled for this turn.
    pub strategy: Strategy,
    /// Rule that produced the index.
    pub rule: Rule,
}

/// Picks the opponent's next move.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, source), fields(cells = %board))]
pub fn select_move<R: RandomSource + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    opponent: Mark,
    human: Mark,
    source: &mut R,
) -> Option<Selection> {
    if board.is_full() {
        warn!("Opponent asked to move on a full board");
        return None;
    }

    let selection = match difficulty.choose_strategy(source) {
        Strategy::Random => random_move(board, source).map(|index| Selection {
            index,
            strategy: Strategy::Random,
            rule: Rule::Fallback,
        }),
        Strategy::Heuristic => heuristic_move(board, opponent, human, source),
    };

    if let Some(selection) = &selection {
        debug!(
            index = selection.index,
            strategy = %selection.strategy,
            rule = %selection.rule,
            "Opponent move selected"
        );
    }
    selection
}

/// Walks the heuristic chain.
#[instrument(skip(board, source))]
pub fn heuristic_move<R: RandomSource + ?Sized>(
    board: &Board,
    opponent: Mark,
    human: Mark,
    source: &mut R,
) -> Option<Selection> {
    let chosen = |index, rule| Selection {
        index,
        strategy: Strategy::Heuristic,
        rule,
    };

    if let Some(index) = find_completing_cell(board, opponent) {
        return Some(chosen(index, Rule::Win));
    }
    if let Some(index) = find_completing_cell(board, human) {
        return Some(chosen(index, Rule::Block));
    }
    if let Some(index) = trap_response(board, human) {
        return Some(chosen(index, Rule::AntiTrap));
    }
    if let Some(index) = center_response(board, human) {
        return Some(chosen(index, Rule::Center));
    }
    if let Some(index) = side_response(board, human) {
        return Some(chosen(index, Rule::SideResponse));
    }
    random_move(board, source).map(|index| chosen(index, Rule::Fallback))
}

/// Picks an empty cell uniformly at random.
pub fn random_move<R: RandomSource + ?Sized>(board: &Board, source: &mut R) -> Option<usize> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    // Clamp so a misbehaving source cannot point past the list.
    let pick = source.pick(empty.len()).min(empty.len() - 1);
    Some(empty[pick])
}

/// First trap-table entry the human has set up whose response is open.
fn trap_response(board: &Board, human: Mark) -> Option<usize> {
    TRAP_TABLE
        .iter()
        .find(|pattern| pattern.matches(board, human) && board.is_empty(pattern.response))
        .map(|pattern| pattern.response)
}

/// Center, when the human holds a corner and the center is open.
fn center_response(board: &Board, human: Mark) -> Option<usize> {
    let corner_taken = CORNERS.iter().any(|&corner| board.holds(corner, human));
    (corner_taken && board.is_empty(CENTER)).then_some(CENTER)
}

/// Opposite edge, when the human holds an edge and the center is open.
fn side_response(board: &Board, human: Mark) -> Option<usize> {
    if !board.is_empty(CENTER) {
        return None;
    }
    SIDE_RESPONSES
        .iter()
        .find(|&&(edge, response)| board.holds(edge, human) && board.is_empty(response))
        .map(|&(_, response)| response)
}
