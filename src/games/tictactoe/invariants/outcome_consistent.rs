//! Outcome invariant: the ended flag and winner agree with the board.

use super::super::{GameStatus, Move, TicTacToe};
use super::Invariant;

/// Invariant: `game_ended` and `winner` match the status derived from the board.
///
/// - In progress: not ended, no winner
/// - Draw: ended, no winner
/// - Won: ended, winner is the line's marker
pub struct OutcomeConsistentInvariant;

impl Invariant<TicTacToe> for OutcomeConsistentInvariant {
    fn holds(game: &TicTacToe) -> bool {
        match game.status() {
            GameStatus::InProgress => !game.game_ended() && game.winner() == Move::Empty,
            GameStatus::Draw => game.game_ended() && game.winner() == Move::Empty,
            GameStatus::Won { winner, .. } => game.game_ended() && game.winner() == winner,
        }
    }

    fn description() -> &'static str {
        "Ended flag and winner agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_game_holds() {
        let game = TicTacToe::default();
        assert!(OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_ended_without_terminal_board_violates() {
        let mut game = TicTacToe::default();
        game.game_ended = true;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let mut game = TicTacToe::default();
        for pos in [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT] {
            game.board.place(pos, Move::O);
        }
        assert!(!OutcomeConsistentInvariant::holds(&game));

        game.game_ended = true;
        game.winner = Move::O;
        assert!(OutcomeConsistentInvariant::holds(&game));
    }
}
