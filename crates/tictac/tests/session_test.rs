//! Tests for the play session controller.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac::{
    Cue, CueSink, GameResult, GameSession, HISTORY_CAPACITY, KeyValueStore, MemoryStore,
    Persistence, STATS_KEY, SilentSink,
};
use tictac_engine::{Difficulty, GameStatus, Mark, MoveError, MoveOutcome, Rule};

/// Collects every cue played.
#[derive(Debug, Default)]
struct RecordingSink {
    played: Vec<Cue>,
}

impl CueSink for RecordingSink {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

fn session() -> GameSession<MemoryStore, RecordingSink> {
    GameSession::open(Persistence::new(MemoryStore::new()), RecordingSink::default())
}

fn play_all<S: KeyValueStore, C: CueSink>(session: &mut GameSession<S, C>, moves: &[usize]) {
    for &index in moves {
        session.play(index);
    }
}

#[test]
fn test_win_updates_stats_and_history() {
    let mut session = session();
    play_all(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(*session.stats().x_wins(), 1);
    assert_eq!(*session.stats().total_games(), 1);
    let entry = session.history().recent().next().unwrap();
    assert_eq!(*entry.result(), GameResult::Win);
    assert_eq!(*entry.winner(), Some(Mark::X));

    // Saved as well as held in memory.
    let saved = session.persistence().load_stats();
    assert_eq!(saved, *session.stats());
    assert_eq!(session.persistence().load_history().len(), 1);
}

#[test]
fn test_draw_is_counted() {
    let mut session = session();
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.game().status(), GameStatus::Draw);
    assert_eq!(*session.stats().draws(), 1);
    assert_eq!(*session.history().recent().next().unwrap().winner(), None);
}

#[test]
fn test_cues_follow_outcomes() {
    let mut session = session();
    play_all(&mut session, &[0, 3, 1, 4]);
    session.play(4); // occupied, no cue
    session.play(2);

    assert_eq!(
        session.cues().played,
        vec![
            Cue::MovePlaced,
            Cue::TurnSwitched,
            Cue::MovePlaced,
            Cue::TurnSwitched,
            Cue::MovePlaced,
            Cue::TurnSwitched,
            Cue::MovePlaced,
            Cue::TurnSwitched,
            Cue::MovePlaced,
            Cue::Win,
        ]
    );
}

#[test]
fn test_sound_off_silences_cues() {
    let mut session = session();
    session.set_sound_enabled(false).unwrap();
    play_all(&mut session, &[0, 3, 1, 4, 2]);
    assert!(session.cues().played.is_empty());
}

#[test]
fn test_invalid_moves_after_game_over() {
    let mut session = session();
    play_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.play(8), MoveOutcome::Invalid(MoveError::GameOver));
    assert_eq!(*session.stats().total_games(), 1);
}

#[test]
fn test_opponent_not_due_in_pvp() {
    let mut session = session();
    session.play(4);
    assert!(!session.opponent_due());
    let mut rng = StdRng::seed_from_u64(1);
    assert!(session.play_opponent(&mut rng).is_none());
    assert_eq!(session.game().turn(), Mark::O);
}

#[test]
fn test_opponent_blocks_on_hard() {
    let mut session = session();
    session.set_opponent_enabled(true).unwrap();
    session.set_difficulty(Difficulty::Hard).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    session.play(0);
    let (_, outcome) = session.play_opponent(&mut rng).unwrap();
    assert!(outcome.is_placed());
    // Corner opening is answered in the center.
    assert!(session.game().board().holds(4, Mark::O));

    session.play(1);
    let (selection, _) = session.play_opponent(&mut rng).unwrap();
    assert_eq!(selection.index, 2);
    assert_eq!(selection.rule, Rule::Block);
}

#[test]
fn test_opponent_games_always_finish() {
    let mut session = session();
    session.set_opponent_enabled(true).unwrap();
    session.set_difficulty(Difficulty::Medium).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        session.new_game();
        while session.game().is_active() {
            if session.opponent_due() {
                session.play_opponent(&mut rng).unwrap();
            } else {
                let first_empty = session.game().board().empty_cells()[0];
                session.play(first_empty);
            }
        }
    }
    assert_eq!(*session.stats().total_games(), 20);
    assert_eq!(session.history().len(), HISTORY_CAPACITY);
}

#[test]
fn test_enabling_opponent_resets_game() {
    let mut session = session();
    session.play(4);
    session.set_opponent_enabled(true).unwrap();
    assert_eq!(session.game().moves().len(), 0);
    assert!(session.settings().opponent_enabled);
    assert!(session.persistence().load_settings().opponent_enabled);
}

#[test]
fn test_difficulty_change_keeps_game() {
    let mut session = session();
    session.play(4);
    session.set_difficulty(Difficulty::Hard).unwrap();
    assert_eq!(session.game().moves(), &[4]);
    assert_eq!(session.persistence().load_settings().difficulty, Difficulty::Hard);
}

#[test]
fn test_session_restores_records() {
    let mut first = session();
    play_all(&mut first, &[0, 3, 1, 4, 2]);
    first.set_difficulty(Difficulty::Medium).unwrap();
    let store = first.persistence().store().clone();

    let second = GameSession::open(Persistence::new(store), SilentSink);
    assert_eq!(*second.stats().x_wins(), 1);
    assert_eq!(second.history().len(), 1);
    assert_eq!(second.settings().difficulty, Difficulty::Medium);
    assert!(second.game().is_active());
}

#[test]
fn test_corrupt_store_starts_fresh() {
    let mut store = MemoryStore::new();
    store.set(STATS_KEY, "][").unwrap();
    let mut session = GameSession::open(Persistence::new(store), SilentSink);
    assert_eq!(*session.stats().total_games(), 0);

    play_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(*session.stats().total_games(), 1);
}

#[test]
fn test_clear_history_keeps_stats() {
    let mut session = session();
    play_all(&mut session, &[0, 3, 1, 4, 2]);
    session.clear_history().unwrap();
    assert!(session.history().is_empty());
    assert!(session.persistence().load_history().is_empty());
    assert_eq!(*session.stats().total_games(), 1);
}
