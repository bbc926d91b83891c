//! Winning cells invariant: only the winning line is flagged.

use super::super::{GameStatus, Position, TicTacToe};
use super::Invariant;

/// Invariant: the cells flagged as winning are exactly the detected winning
/// line, and none are flagged while no line is complete.
pub struct WinningCellsInvariant;

impl Invariant<TicTacToe> for WinningCellsInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let line = match game.status() {
            GameStatus::Won { line, .. } => Some(line),
            GameStatus::InProgress | GameStatus::Draw => None,
        };

        Position::ALL.into_iter().all(|pos| {
            let expected = line.is_some_and(|line| line.contains(&pos));
            game.board().cell(pos).is_winning() == expected
        })
    }

    fn description() -> &'static str {
        "Only the winning line is flagged"
    }
}
