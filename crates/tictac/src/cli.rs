//! Command-line interface for tictac.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictac_engine::Difficulty;

/// Tic-tac-toe in the terminal, with an optional computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for saved stats, history and settings
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// On/off switch for settings flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    /// Enable.
    On,
    /// Disable.
    Off,
}

impl Toggle {
    /// Returns true for `On`.
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games interactively
    Play {
        /// Play against the computer (saved as the new default)
        #[arg(long, conflicts_with = "pvp")]
        opponent: bool,

        /// Two players share the keyboard (saved as the new default)
        #[arg(long)]
        pvp: bool,

        /// Computer difficulty: easy, medium or hard (saved as the new default)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show cumulative statistics
    Stats,

    /// Show the most recent games
    History,

    /// Forget the recent games
    ClearHistory,

    /// Show or change saved settings
    Settings {
        /// Computer opponent on or off
        #[arg(long)]
        opponent: Option<Toggle>,

        /// Computer difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Audio cues on or off
        #[arg(long)]
        sound: Option<Toggle>,
    },

    /// Ask the computer for a move on a given board
    Suggest {
        /// Nine cells, X/O/. in row-major order (e.g. "X..|.O.|..X")
        board: String,

        /// Difficulty to play at
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,
    },
}
