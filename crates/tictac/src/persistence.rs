//! Typed records on top of a key-value store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::{GameHistory, GameStats, HistoryEntry, KeyValueStore, Settings, StoreError};

/// Key holding [`GameStats`].
pub const STATS_KEY: &str = "stats";
/// Key holding [`GameHistory`].
pub const HISTORY_KEY: &str = "history";
/// Key holding [`Settings`].
pub const SETTINGS_KEY: &str = "settings";

/// Reads and writes game records as JSON.
///
/// Loads never fail: a missing, unreadable or corrupt record is logged and
/// replaced by its default.
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Wraps a store.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(skip(self))]
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved record, starting fresh");
                return T::default();
            }
            Err(e) => {
                warn!(error = %e, "Record unavailable, starting fresh");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Corrupt record, starting fresh");
                T::default()
            }
        }
    }

    #[instrument(skip(self, value))]
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).inspect_err(|e| {
            warn!(error = %e, "Failed to save record");
        })
    }

    /// Loads cumulative statistics.
    pub fn load_stats(&self) -> GameStats {
        self.load_or_default(STATS_KEY)
    }

    /// Saves cumulative statistics.
    pub fn save_stats(&mut self, stats: &GameStats) -> Result<(), StoreError> {
        self.save(STATS_KEY, stats)
    }

    /// Loads recent games, trimmed to capacity.
    pub fn load_history(&self) -> GameHistory {
        let mut history: GameHistory = self.load_or_default(HISTORY_KEY);
        history.truncate();
        history
    }

    /// Appends a finished game to the stored history.
    ///
    /// Returns the history as saved.
    #[instrument(skip(self, entry))]
    pub fn append_history(&mut self, entry: HistoryEntry) -> Result<GameHistory, StoreError> {
        let mut history = self.load_history();
        history.push(entry);
        self.save(HISTORY_KEY, &history)?;
        debug!(entries = history.len(), "History saved");
        Ok(history)
    }

    /// Deletes the stored history.
    #[instrument(skip(self))]
    pub fn clear_history(&mut self) -> Result<(), StoreError> {
        info!("Clearing game history");
        self.store.remove(HISTORY_KEY)
    }

    /// Loads settings.
    pub fn load_settings(&self) -> Settings {
        self.load_or_default(SETTINGS_KEY)
    }

    /// Saves settings.
    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.save(SETTINGS_KEY, settings)
    }
}
