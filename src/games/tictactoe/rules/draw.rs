//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Move};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.count(Move::Empty) == 0
}
