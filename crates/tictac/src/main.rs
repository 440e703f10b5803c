//! tictac - terminal front end.
//!
//! Loads configuration, installs logging and dispatches subcommands.

#![warn(missing_docs)]

mod cli;

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, Toggle};
use tictac::{AppConfig, FileStore, GameSession, Persistence, TerminalBell, render};
use tictac_engine::{Board, Difficulty, Mark, select_move};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

type Session = GameSession<FileStore, TerminalBell<io::Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            opponent,
            pvp,
            difficulty,
            delay_ms,
        } => {
            let mut session = open_session(&config);
            if opponent || pvp {
                session.set_opponent_enabled(opponent).ok();
            }
            if let Some(difficulty) = difficulty {
                session.set_difficulty(difficulty).ok();
            }
            let delay = delay_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| config.opponent_delay());
            run_game_loop(&mut session, delay)
        }
        Command::Stats => {
            println!("{}", render::stats(open_session(&config).stats()));
            Ok(())
        }
        Command::History => {
            println!("{}", render::history(open_session(&config).history()));
            Ok(())
        }
        Command::ClearHistory => {
            open_session(&config)
                .clear_history()
                .context("Failed to clear history")?;
            println!("History cleared");
            Ok(())
        }
        Command::Settings {
            opponent,
            difficulty,
            sound,
        } => run_settings(&config, opponent, difficulty, sound),
        Command::Suggest { board, difficulty } => run_suggest(&board, difficulty),
    }
}

/// Opens a session on the configured data directory.
#[instrument(skip(config), fields(data_dir = %config.data_dir().display()))]
fn open_session(config: &AppConfig) -> Session {
    let store = FileStore::new(config.data_dir());
    GameSession::open(Persistence::new(store), TerminalBell::new(io::stdout()))
}

/// Interactive loop: human moves from stdin, computer moves when due.
#[instrument(skip(session))]
fn run_game_loop(session: &mut Session, delay: std::time::Duration) -> Result<()> {
    info!(mode = session.settings().mode().label(), "Starting game loop");
    println!("{}", render::settings(session.settings()));
    println!("Enter 1-9 to play, 'n' for a new game, 'q' to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rng = rand::rng();

    loop {
        if session.opponent_due() {
            thread::sleep(delay);
            if let Some((selection, _)) = session.play_opponent(&mut rng) {
                println!("{}", render::opponent_line(&selection));
            }
            continue;
        }

        println!("{}\n", render::board(session.game()));
        println!("{}", render::status_line(session.game()));

        if !session.game().is_active() {
            println!("{}\n", render::stats(session.stats()));
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            match lines.next().transpose()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    session.new_game();
                    continue;
                }
                _ => return Ok(()),
            }
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        match line.trim() {
            "q" | "quit" => return Ok(()),
            "n" | "new" => session.new_game(),
            input => match input.parse::<usize>() {
                Ok(cell @ 1..=9) => {
                    let outcome = session.play(cell - 1);
                    if let Some(message) = render::outcome_line(&outcome) {
                        println!("{}", message);
                    }
                }
                _ => println!("Enter a cell number from 1 to 9."),
            },
        }
    }
}

/// Shows settings, applying any requested changes first.
#[instrument(skip(config))]
fn run_settings(
    config: &AppConfig,
    opponent: Option<Toggle>,
    difficulty: Option<Difficulty>,
    sound: Option<Toggle>,
) -> Result<()> {
    let mut session = open_session(config);
    if let Some(toggle) = opponent {
        session
            .set_opponent_enabled(toggle.enabled())
            .context("Failed to save settings")?;
    }
    if let Some(difficulty) = difficulty {
        session
            .set_difficulty(difficulty)
            .context("Failed to save settings")?;
    }
    if let Some(toggle) = sound {
        session
            .set_sound_enabled(toggle.enabled())
            .context("Failed to save settings")?;
    }
    println!("{}", render::settings(session.settings()));
    Ok(())
}

/// Prints the computer's choice for a board given on the command line.
#[instrument]
fn run_suggest(board: &str, difficulty: Difficulty) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let x = board.squares().iter().filter(|s| s.mark() == Some(Mark::X)).count();
    let o = board.marks_placed() - x;
    let to_move = match x.checked_sub(o) {
        Some(0) => Mark::X,
        Some(1) => Mark::O,
        _ => bail!("Board is not reachable: {} X marks and {} O marks", x, o),
    };

    println!("{}\n", board.display());
    match select_move(&board, difficulty, to_move, to_move.opponent(), &mut rand::rng()) {
        Some(selection) => println!(
            "{} plays {} ({}, {})",
            to_move,
            selection.index + 1,
            selection.strategy,
            selection.rule
        ),
        None => println!("No move available"),
    }
    Ok(())
}
