//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the controller share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the status of `board`.
///
/// Lines are checked rows first, then columns, then the main and anti
/// diagonals; the first complete line found is reported. With no line and
/// no empty cell the game is a draw.
#[instrument(level = "trace", skip(board))]
pub fn game_status(board: &Board) -> GameStatus {
    if let Some((winner, line)) = winning_line(board) {
        return GameStatus::Won { winner, line };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
