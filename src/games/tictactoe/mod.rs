//! Tic-tac-toe against a computer opponent.

mod action;
mod board;
mod controller;
mod invariants;
mod position;
mod rules;
mod search;
mod strategy;
mod types;

pub use action::{IgnoredReason, MoveOutcome, Placement};
pub use board::Board;
pub use controller::{Snapshot, TicTacToe};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use position::{BOARD_DIMENSION, Position, PositionError};
pub use rules::{WINNING_LINES, game_status};
pub use search::{DRAW, LOSS, Score, WIN, best_move, minimax};
pub use strategy::{Computer, Difficulty, Strategy, ThinkingDelay};
pub use types::{Cell, GameStatus, Move};
