//! Tests for the game controller state machine.

use noughts::{
    Board, Difficulty, GameConfig, GameStatus, IgnoredReason, Move, MoveOutcome, Position,
    TicTacToe, best_move,
};
use strum::IntoEnumIterator;

fn game(difficulty: Difficulty, user_marker: Move, seed: u64) -> TicTacToe {
    TicTacToe::new(
        &GameConfig::default()
            .with_difficulty(difficulty)
            .with_user_marker(user_marker)
            .with_seed(seed),
    )
}

/// Plays the first free cell for the human until the game ends.
fn play_out(game: &mut TicTacToe) {
    while !game.game_ended() {
        let pos = game.board().available_moves()[0];
        game.make_move(pos);
    }
}

#[test]
fn test_reset_alternates_first_mover() {
    let mut game = game(Difficulty::Pro, Move::X, 1);
    assert_eq!(game.first_mover(), Move::X);

    game.make_move(Position::TOP_CENTER);
    game.reset_game_state();

    // Computer holds O and opens the new game.
    assert_eq!(game.first_mover(), Move::O);
    assert_eq!(game.current_move(), Move::X);
    assert_eq!(game.board().cell(Position::TOP_LEFT).marker(), Move::O);
    assert_eq!(game.board().cell(Position::TOP_CENTER).marker(), Move::Empty);
    assert!(!game.game_ended());
    assert_eq!(game.winner(), Move::Empty);
    assert_eq!(game.history().len(), 1);

    game.reset_game_state();
    assert_eq!(game.first_mover(), Move::X);
    assert_eq!(game.board().available_moves().len(), 9);
}

#[test]
fn test_make_move_accepted() {
    let mut game = game(Difficulty::Easy, Move::X, 2);
    assert_eq!(game.make_move(Position::TOP_LEFT), MoveOutcome::Applied);
    assert_eq!(game.board().cell(Position::TOP_LEFT).marker(), Move::X);
    assert_eq!(game.history()[0].marker, Move::X);
}

#[test]
fn test_make_move_already_done() {
    let mut game = game(Difficulty::Easy, Move::X, 3);
    game.make_move(Position::TOP_LEFT);
    let before = game.snapshot();

    let outcome = game.make_move(Position::TOP_LEFT);
    assert_eq!(
        outcome,
        MoveOutcome::Ignored(IgnoredReason::SquareOccupied(Position::TOP_LEFT))
    );
    assert_eq!(game.board().cell(Position::TOP_LEFT).marker(), Move::X);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_make_move_after_game_ended() {
    let mut game = game(Difficulty::Pro, Move::X, 4);
    play_out(&mut game);
    assert!(game.game_ended());
    let before = game.snapshot();

    let target = game
        .board()
        .available_moves()
        .first()
        .copied()
        .unwrap_or(Position::CENTER);
    assert_eq!(
        game.make_move(target),
        MoveOutcome::Ignored(IgnoredReason::GameOver)
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.current_move(), *before.current_move());
}

#[test]
fn test_ended_game_message_and_flags() {
    let mut game = game(Difficulty::Pro, Move::X, 5);
    play_out(&mut game);

    // Pro never loses, so the human cannot be the winner.
    assert_ne!(game.winner(), Move::X);
    if game.winner() == Move::O {
        assert_eq!(game.message(), "Winner is O");
        let flagged = Position::ALL
            .into_iter()
            .filter(|&pos| game.board().cell(pos).is_winning())
            .count();
        assert_eq!(flagged, 3);
    } else {
        assert_eq!(game.message(), "Game ended as a draw");
    }
}

#[test]
fn test_human_never_moves_for_computer() {
    let mut game = game(Difficulty::Easy, Move::O, 6);
    // Computer opened as X; every human move is followed by a reply.
    while !game.game_ended() {
        assert_eq!(game.current_move(), Move::O);
        let pos = game.board().available_moves()[0];
        game.make_move(pos);
    }
    let history = game.history();
    for (index, placement) in history.iter().enumerate() {
        let expected = if index % 2 == 0 { Move::X } else { Move::O };
        assert_eq!(placement.marker, expected);
    }
}

#[test]
fn test_intermediate_errs_at_most_once_per_game() {
    for seed in 0..40 {
        let mut game = game(Difficulty::Intermediate, Move::X, seed);

        for _ in 0..2 {
            play_out(&mut game);

            let mut replay = Board::new();
            let mut mistakes = 0;
            for placement in game.history() {
                if placement.marker == game.computer_marker() {
                    let mut simulation = Board::copy_of(&replay);
                    let available = simulation.available_moves();
                    let best = best_move(&mut simulation, &available, placement.marker);
                    if best != Some(placement.position) {
                        mistakes += 1;
                    }
                }
                replay.place(placement.position, placement.marker);
            }
            assert!(mistakes <= 1, "seed {} made {} mistakes", seed, mistakes);

            game.reset_game_state();
        }
    }
}

#[test]
fn test_difficulty_change_takes_fresh_strategy() {
    let mut game = game(Difficulty::Intermediate, Move::X, 7);
    play_out(&mut game);
    game.set_difficulty(Difficulty::Intermediate);
    assert_eq!(
        game.computer().strategy(),
        &noughts::Strategy::for_difficulty(Difficulty::Intermediate)
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut game = game(Difficulty::Pro, Move::X, 8);
    game.make_move(Position::CENTER);
    let json = serde_json::to_value(game.snapshot()).expect("snapshot serializes");
    assert_eq!(json["current_move"], "X");
    assert_eq!(json["difficulty"], "pro");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_every_difficulty_finishes_consistently() {
    for difficulty in Difficulty::iter() {
        for user_marker in [Move::X, Move::O] {
            let mut game = game(difficulty, user_marker, 9);
            play_out(&mut game);

            match game.status() {
                GameStatus::Won { winner, .. } => assert_eq!(game.winner(), winner),
                GameStatus::Draw => assert_eq!(game.winner(), Move::Empty),
                GameStatus::InProgress => panic!("{} game did not finish", difficulty),
            }
            let occupied = game.board().count(Move::X) + game.board().count(Move::O);
            assert_eq!(game.history().len(), occupied);
        }
    }
}
