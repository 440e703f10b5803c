//! Tic-tac-toe with a heuristic computer opponent and persistent records.
//!
//! Builds on [`tictac_engine`] for the rules and opponent, and adds what a
//! player sees around a game:
//!
//! - **Session**: [`GameSession`] runs games, plays cues and records results
//! - **Records**: [`GameStats`] and a bounded [`GameHistory`]
//! - **Settings**: game mode, difficulty and sound in [`Settings`]
//! - **Persistence**: typed JSON records over any [`KeyValueStore`]
//! - **Cues**: [`Cue`] events and their [`Tone`]s for a [`CueSink`]
//!
//! # Example
//!
//! ```
//! use tictac::{GameSession, MemoryStore, Persistence, SilentSink};
//!
//! let mut session = GameSession::open(Persistence::new(MemoryStore::new()), SilentSink);
//! for index in [0, 3, 1, 4, 2] {
//!     session.play(index);
//! }
//! assert_eq!(*session.stats().x_wins(), 1);
//! assert_eq!(session.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod cues;
mod error;
mod persistence;
mod records;
pub mod render;
mod session;
mod settings;
mod store;

pub use config::{AppConfig, DATA_DIR_ENV, DEFAULT_CONFIG_FILE};
pub use cues::{Cue, CueSink, SilentSink, TerminalBell, Tone, Waveform};
pub use error::{ConfigError, StoreError};
pub use persistence::{HISTORY_KEY, Persistence, SETTINGS_KEY, STATS_KEY};
pub use records::{GameHistory, GameResult, GameStats, HISTORY_CAPACITY, HistoryEntry};
pub use session::{COMPUTER_MARK, GameSession, HUMAN_MARK};
pub use settings::{GameMode, Settings};
pub use store::{FileStore, KeyValueStore, MemoryStore};
