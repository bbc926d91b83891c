//! Balanced markers invariant: the sides never get more than one move apart.

use super::super::{Move, TicTacToe};
use super::Invariant;

/// Invariant: X and O counts differ by at most one.
///
/// Either side may open, so only the distance is checked, not which side
/// is ahead.
pub struct BalancedMarkersInvariant;

impl Invariant<TicTacToe> for BalancedMarkersInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let x_count = game.board().count(Move::X);
        let o_count = game.board().count(Move::O);
        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}
