//! Exhaustive minimax over the tic-tac-toe game tree.
//!
//! The search plays trial moves on a caller-supplied simulation board and
//! restores each cell before returning, so the board leaves the search with
//! the markers it came in with.

use super::{Board, GameStatus, Move, Position};
use tracing::{debug, instrument};

/// Score of a position from the maximizing side's point of view.
pub type Score = i8;

/// Maximizing side wins.
pub const WIN: Score = 1;
/// Neither side can force a win.
pub const DRAW: Score = 0;
/// Maximizing side loses.
pub const LOSS: Score = -1;

/// Picks the best move for `computer` among `available`.
///
/// An empty board always opens at the top-left corner. Otherwise every
/// available move is scored and the first move reaching the highest score
/// wins, so ties go to the earliest move in `available`.
///
/// Returns `None` only if `available` is empty.
#[instrument(skip(board, available), fields(candidates = available.len()))]
pub fn best_move(board: &mut Board, available: &[Position], computer: Move) -> Option<Position> {
    if available.len() == Position::ALL.len() {
        return Some(Position::TOP_LEFT);
    }

    let mut best: Option<(Position, Score)> = None;
    for &pos in available {
        board.place(pos, computer);
        let score = minimax(false, board, computer);
        board.place(pos, Move::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Best move found");
    }
    best.map(|(pos, _)| pos)
}

/// Scores `board` for `maximize`, with `maximizing` telling whose ply it is.
///
/// Terminal boards score [`WIN`], [`LOSS`] or [`DRAW`]. Scanning a ply stops
/// as soon as it reaches the best value that ply can get.
pub fn minimax(maximizing: bool, board: &mut Board, maximize: Move) -> Score {
    match board.status() {
        GameStatus::Draw => return DRAW,
        GameStatus::Won { winner, .. } => {
            return if winner == maximize { WIN } else { LOSS };
        }
        GameStatus::InProgress => {}
    }

    let (marker, bound) = if maximizing {
        (maximize, WIN)
    } else {
        (maximize.opposite(), LOSS)
    };

    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for pos in board.available_moves() {
        board.place(pos, marker);
        let score = minimax(!maximizing, board, maximize);
        board.place(pos, Move::Empty);

        best = if maximizing { best.max(score) } else { best.min(score) };
        if best == bound {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: [Move; 9]) -> Board {
        let mut board = Board::new();
        for (pos, marker) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, marker);
        }
        board
    }

    #[test]
    fn test_empty_board_opens_top_left() {
        let mut board = Board::new();
        let available = board.available_moves();
        assert_eq!(best_move(&mut board, &available, Move::X), Some(Position::TOP_LEFT));
        assert_eq!(best_move(&mut board, &available, Move::O), Some(Position::TOP_LEFT));
    }

    #[test]
    fn test_takes_immediate_win() {
        use Move::{Empty as E, O, X};
        // X X _ / O O _ / _ _ _ ; X to play
        let mut board = board_from([X, X, E, O, O, E, E, E, E]);
        let available = board.available_moves();
        assert_eq!(best_move(&mut board, &available, X), Some(Position::TOP_RIGHT));
    }

    #[test]
    fn test_blocks_opponent() {
        use Move::{Empty as E, O, X};
        // X X _ / _ O _ / _ _ _ ; O to play must block
        let mut board = board_from([X, X, E, E, O, E, E, E, E]);
        let available = board.available_moves();
        assert_eq!(best_move(&mut board, &available, O), Some(Position::TOP_RIGHT));
    }

    #[test]
    fn test_search_restores_board() {
        use Move::{Empty as E, O, X};
        let mut board = board_from([X, E, E, E, O, E, E, E, E]);
        let before = board.clone();
        let available = board.available_moves();
        best_move(&mut board, &available, X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_terminal_scores() {
        use Move::{O, X};
        let mut won = board_from([X, X, X, O, O, X, O, X, O]);
        assert_eq!(minimax(true, &mut won, X), WIN);
        assert_eq!(minimax(true, &mut won, O), LOSS);

        let mut drawn = board_from([X, O, X, O, X, X, O, X, O]);
        assert_eq!(minimax(false, &mut drawn, X), DRAW);
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board, &[], Move::X), None);
    }
}
