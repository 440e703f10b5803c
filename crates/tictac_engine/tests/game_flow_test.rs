//! End-to-end tests for the game state machine.

use tictac_engine::{Board, GameState, GameStatus, Mark, MoveError, MoveOutcome, Square};

fn play(moves: &[usize]) -> (GameState, Vec<MoveOutcome>) {
    let mut game = GameState::new();
    let outcomes = moves.iter().map(|&index| game.apply_move(index)).collect();
    (game, outcomes)
}

#[test]
fn test_fixed_sequence_wins_middle_row() {
    let (game, outcomes) = play(&[4, 0, 2, 6, 3, 1, 5]);

    assert_eq!(
        outcomes.last(),
        Some(&MoveOutcome::Won {
            mark: Mark::X,
            line: [3, 4, 5]
        })
    );
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: Mark::X,
            line: [3, 4, 5]
        }
    );
    assert!(outcomes[..6].iter().all(|o| matches!(o, MoveOutcome::Continued { .. })));
}

#[test]
fn test_o_can_win() {
    let (game, outcomes) = play(&[0, 4, 1, 2, 8, 6]);
    assert_eq!(
        outcomes.last(),
        Some(&MoveOutcome::Won {
            mark: Mark::O,
            line: [2, 4, 6]
        })
    );
    assert_eq!(game.winner(), Some(Mark::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let (game, outcomes) = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Draw));
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.board(), &"XOX|XOO|OXX".parse::<Board>().unwrap());
}

#[test]
fn test_turn_alternates_until_game_ends() {
    let (_, outcomes) = play(&[0, 1, 2, 4, 3, 5, 7, 6]);
    let mut expected = Mark::O;
    for outcome in outcomes {
        assert_eq!(outcome, MoveOutcome::Continued { next_turn: expected });
        expected = expected.opponent();
    }
}

#[test]
fn test_moves_after_win_are_rejected() {
    let (mut game, _) = play(&[0, 3, 1, 4, 2]);
    let before = game.clone();

    assert_eq!(game.apply_move(8), MoveOutcome::Invalid(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_invalid_moves_never_mutate() {
    let (mut game, _) = play(&[4, 0]);
    let before = game.clone();

    for index in [0, 4, 9, 100] {
        let outcome = game.apply_move(index);
        assert!(!outcome.is_placed());
        assert_eq!(game, before);
    }
}

#[test]
fn test_marks_equal_completed_turns() {
    let (game, _) = play(&[4, 0, 8, 2]);
    assert_eq!(game.board().marks_placed(), game.moves().len());
}

#[test]
fn test_reset_from_any_state() {
    for moves in [&[][..], &[4][..], &[0, 3, 1, 4, 2][..], &[0, 1, 2, 4, 3, 5, 7, 6, 8][..]] {
        let (mut game, _) = play(moves);
        game.reset();
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.moves().is_empty());
    }
}

#[test]
fn test_state_serializes() {
    let (game, _) = play(&[4, 0]);
    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}
