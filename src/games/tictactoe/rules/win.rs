//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Position};
use tracing::instrument;

/// Every line in detection priority order: rows, columns, main diagonal,
/// anti-diagonal.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // Columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// Finds the first line holding three equal non-empty markers.
///
/// Returns the marker and the line, or `None` if nobody has three in a row.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Move, [Position; 3])> {
    WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| {
        let marker = board.cell(a).marker();
        let complete = !marker.is_empty()
            && marker == board.cell(b).marker()
            && marker == board.cell(c).marker();
        complete.then_some((marker, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TOP_LEFT, Move::X);
        board.place(Position::TOP_CENTER, Move::X);
        board.place(Position::TOP_RIGHT, Move::X);
        assert_eq!(
            winning_line(&board),
            Some((Move::X, [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(Position::TOP_RIGHT, Move::O);
        board.place(Position::CENTER, Move::O);
        board.place(Position::BOTTOM_LEFT, Move::O);
        assert_eq!(
            winning_line(&board),
            Some((Move::O, [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT]))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Position::TOP_LEFT, Move::X);
        board.place(Position::TOP_CENTER, Move::O);
        board.place(Position::TOP_RIGHT, Move::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TOP_LEFT, Move::X);
        board.place(Position::TOP_CENTER, Move::X);
        assert_eq!(winning_line(&board), None);
    }
}
