//! A play session: one game at a time plus the records around it.

use tictac_engine::{Difficulty, GameState, Mark, MoveOutcome, RandomSource, Selection, select_move};
use tracing::{debug, info, instrument, warn};

use crate::{
    Cue, CueSink, GameHistory, GameStats, HistoryEntry, KeyValueStore, Persistence,
    Settings, StoreError,
};

/// Mark played by the person at the keyboard.
pub const HUMAN_MARK: Mark = Mark::X;

/// Mark played by the computer when the opponent is enabled.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Drives games, cues and persistence for a single player seat.
///
/// The game state is owned here and only changed through [`GameSession::play`]
/// and [`GameSession::new_game`]; computer moves go through `play` exactly
/// like human ones.
#[derive(Debug)]
pub struct GameSession<S, C> {
    game: GameState,
    settings: Settings,
    stats: GameStats,
    history: GameHistory,
    persistence: Persistence<S>,
    cues: C,
}

impl<S: KeyValueStore, C: CueSink> GameSession<S, C> {
    /// Opens a session, restoring saved stats, history and settings.
    #[instrument(skip(persistence, cues))]
    pub fn open(persistence: Persistence<S>, cues: C) -> Self {
        let stats = persistence.load_stats();
        let history = persistence.load_history();
        let settings = persistence.load_settings();
        info!(
            total_games = stats.total_games(),
            opponent = settings.opponent_enabled,
            difficulty = %settings.difficulty,
            "Session opened"
        );
        Self {
            game: GameState::new(),
            settings,
            stats,
            history,
            persistence,
            cues,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns cumulative statistics.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Returns recent games.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Returns the cue sink.
    pub fn cues(&self) -> &C {
        &self.cues
    }

    /// Returns the persistence layer.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Places the current mark at `index`.
    ///
    /// Invalid moves are ignored and reported as such. A finished game is
    /// counted and saved before returning; save failures are logged only.
    #[instrument(skip(self), fields(turn = %self.game.turn()))]
    pub fn play(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.game.apply_move(index);
        if let MoveOutcome::Invalid(reason) = outcome {
            debug!(%reason, "Move ignored");
            return outcome;
        }

        if self.settings.sound_enabled {
            for cue in Cue::for_outcome(&outcome) {
                self.cues.play(cue);
            }
        }

        if outcome.is_terminal() {
            self.finish_game();
        }
        outcome
    }

    fn finish_game(&mut self) {
        let Some(entry) = HistoryEntry::from_game(&self.game) else {
            return;
        };
        self.stats.record(*entry.result(), *entry.winner());
        info!(
            result = %entry.result(),
            winner = ?entry.winner(),
            total_games = self.stats.total_games(),
            "Game finished"
        );

        let _ = self.persistence.save_stats(&self.stats);
        self.history.push(entry.clone());
        match self.persistence.append_history(entry) {
            Ok(saved) => self.history = saved,
            Err(e) => warn!(error = %e, "History kept in memory only"),
        }
    }

    /// Returns true when the computer should move next.
    pub fn opponent_due(&self) -> bool {
        self.settings.opponent_enabled && self.game.is_active() && self.game.turn() == COMPUTER_MARK
    }

    /// Lets the computer move if it is due.
    ///
    /// Returns the selection and the outcome of playing it, or `None` when
    /// the computer is not due or has no cell to play.
    #[instrument(skip(self, source))]
    pub fn play_opponent<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
    ) -> Option<(Selection, MoveOutcome)> {
        if !self.opponent_due() {
            return None;
        }
        let selection = select_move(
            self.game.board(),
            self.settings.difficulty,
            COMPUTER_MARK,
            HUMAN_MARK,
            source,
        )?;
        let outcome = self.play(selection.index);
        Some((selection, outcome))
    }

    /// Starts a fresh game. Records are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        // Same click as a placed mark.
        if self.settings.sound_enabled {
            self.cues.play(Cue::MovePlaced);
        }
        self.game.reset();
    }

    /// Switches the computer opponent on or off and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_opponent_enabled(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.settings.opponent_enabled = enabled;
        let saved = self.persistence.save_settings(&self.settings);
        self.new_game();
        saved
    }

    /// Changes the opponent difficulty. The current game continues.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), StoreError> {
        self.settings = self.settings.with_difficulty(difficulty);
        self.persistence.save_settings(&self.settings)
    }

    /// Turns audio cues on or off.
    #[instrument(skip(self))]
    pub fn set_sound_enabled(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.settings.sound_enabled = enabled;
        self.persistence.save_settings(&self.settings)
    }

    /// Forgets recent games. Statistics are kept.
    #[instrument(skip(self))]
    pub fn clear_history(&mut self) -> Result<(), StoreError> {
        self.history.clear();
        self.persistence.clear_history()
    }
}
