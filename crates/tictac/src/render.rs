//! Plain-text rendering for the terminal front end.

use tictac_engine::{GameState, GameStatus, Mark, MoveOutcome, Selection};

use crate::{GameHistory, GameResult, GameStats, Settings};

/// Status line for the current game.
pub fn status_line(game: &GameState) -> String {
    match game.status() {
        GameStatus::InProgress => format!("Player {}'s turn", game.turn()),
        GameStatus::Won { winner, .. } => format!("Player {} wins!", winner),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

/// Board with the winning line, if any, listed underneath.
pub fn board(game: &GameState) -> String {
    let mut out = game.board().display();
    if let GameStatus::Won { line, .. } = game.status() {
        let cells: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
        out.push_str(&format!("\nWinning line: {}", cells.join("-")));
    }
    out
}

/// One line describing a move outcome, or `None` when nothing needs saying.
pub fn outcome_line(outcome: &MoveOutcome) -> Option<String> {
    match outcome {
        MoveOutcome::Invalid(reason) => Some(format!("{}.", reason)),
        _ => None,
    }
}

/// Describes a computer move.
pub fn opponent_line(selection: &Selection) -> String {
    format!(
        "Computer plays {} ({}, {})",
        selection.index + 1,
        selection.strategy,
        selection.rule
    )
}

/// Statistics table.
pub fn stats(stats: &GameStats) -> String {
    format!(
        "X Wins:      {}\nO Wins:      {}\nDraws:       {}\nTotal Games: {}\nX win rate:  {:.1}%",
        stats.x_wins(),
        stats.o_wins(),
        stats.draws(),
        stats.total_games(),
        stats.win_rate(Mark::X)
    )
}

/// Recent games, newest first.
pub fn history(history: &GameHistory) -> String {
    if history.is_empty() {
        return "No games played yet".to_string();
    }
    history
        .recent()
        .map(|entry| {
            let result = match entry.result() {
                GameResult::Win => "WIN ",
                GameResult::Draw => "DRAW",
            };
            let winner = (*entry.winner())
                .map(|mark| mark.to_string())
                .unwrap_or_else(|| "Draw".to_string());
            format!(
                "{}  {:<4}  {}  {}  ({} moves)",
                result,
                winner,
                entry.timestamp().format("%Y-%m-%d %H:%M"),
                entry.board(),
                entry.moves()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings summary.
pub fn settings(settings: &Settings) -> String {
    format!(
        "Mode:       {}\nDifficulty: {}\nSound:      {}",
        settings.mode().label(),
        settings.difficulty,
        if settings.sound_enabled { "on" } else { "off" }
    )
}
