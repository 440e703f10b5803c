//! Player settings: game mode, opponent difficulty and sound.

use serde::{Deserialize, Serialize};
use tictac_engine::Difficulty;
use tracing::instrument;

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Two people share the board.
    PlayerVsPlayer,
    /// The computer plays O.
    PlayerVsComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::PlayerVsComputer => "Player vs AI",
        }
    }
}

/// User-configurable settings, persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether the computer plays O.
    pub opponent_enabled: bool,
    /// Opponent difficulty.
    pub difficulty: Difficulty,
    /// Whether audio cues are played.
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opponent_enabled: false,
            difficulty: Difficulty::Easy,
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the game mode these settings select.
    pub fn mode(&self) -> GameMode {
        if self.opponent_enabled {
            GameMode::PlayerVsComputer
        } else {
            GameMode::PlayerVsPlayer
        }
    }

    /// Switches between two-player and computer opponent.
    #[instrument]
    pub fn toggle_opponent(self) -> Self {
        Self {
            opponent_enabled: !self.opponent_enabled,
            ..self
        }
    }

    /// Returns these settings with another difficulty.
    #[instrument]
    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }
}
