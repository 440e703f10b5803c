//! Game statistics and recent-game history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictac_engine::{Board, GameState, GameStatus, Mark};
use tracing::{debug, instrument};

/// Number of finished games kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameResult {
    /// A mark completed a line.
    Win,
    /// The board filled without a line.
    Draw,
}

/// Cumulative results across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GameStats {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
    /// All finished games.
    total_games: u32,
}

impl GameStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: GameResult, winner: Option<Mark>) {
        match (result, winner) {
            (GameResult::Win, Some(Mark::X)) => self.x_wins += 1,
            (GameResult::Win, Some(Mark::O)) => self.o_wins += 1,
            _ => self.draws += 1,
        }
        self.total_games += 1;
        debug!(total = self.total_games, "Statistics updated");
    }

    /// Wins recorded for `mark`.
    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Win rate for `mark` as a percentage (0.0-100.0).
    pub fn win_rate(&self, mark: Mark) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            (self.wins_for(mark) as f64 / self.total_games as f64) * 100.0
        }
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// How the game ended.
    result: GameResult,
    /// Winning mark, `None` for a draw.
    winner: Option<Mark>,
    /// Final board.
    board: Board,
    /// Number of marks placed.
    moves: usize,
    /// When the game finished.
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Snapshots a finished game, stamped now.
    ///
    /// Returns `None` while the game is still in progress.
    #[instrument(skip(game))]
    pub fn from_game(game: &GameState) -> Option<Self> {
        let (result, winner) = match game.status() {
            GameStatus::InProgress => return None,
            GameStatus::Won { winner, .. } => (GameResult::Win, Some(winner)),
            GameStatus::Draw => (GameResult::Draw, None),
        };
        Some(Self::new(
            result,
            winner,
            game.board().clone(),
            game.moves().len(),
            Utc::now(),
        ))
    }
}

/// The most recent finished games, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHistory {
    entries: VecDeque<HistoryEntry>,
}

impl GameHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, evicting the oldest beyond [`HISTORY_CAPACITY`].
    #[instrument(skip(self, entry))]
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        self.truncate();
    }

    /// Drops the oldest entries beyond [`HISTORY_CAPACITY`].
    pub(crate) fn truncate(&mut self) {
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Entries newest first.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
