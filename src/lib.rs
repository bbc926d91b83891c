//! Noughts - tic-tac-toe against a computer opponent
//!
//! This library provides the game engine: board, win/draw rules, an
//! exhaustive minimax search, three difficulty tiers, and a controller that
//! runs the turn order between a human and the computer.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells with status detection
//! - **Search**: minimax over a simulation board
//! - **Strategy**: Easy (random), Intermediate (one mistake), Pro (perfect)
//! - **Controller**: [`TicTacToe`], driven by a presentation layer
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameConfig, Move, Position, TicTacToe};
//!
//! let config = GameConfig::default()
//!     .with_difficulty(Difficulty::Pro)
//!     .with_seed(7);
//! let mut game = TicTacToe::new(&config);
//!
//! game.make_move(Position::CENTER);
//! assert_eq!(game.board().count(Move::O), 1);
//! assert_eq!(game.current_move(), Move::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal frontend
pub use terminal::{SimulationReport, play_session, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_DIMENSION, Board, Cell, Computer, DRAW, Difficulty, GameStatus, IgnoredReason,
    Invariant, InvariantSet, InvariantViolation, LOSS, Move, MoveOutcome, Placement, Position,
    PositionError, Score, Snapshot, Strategy, ThinkingDelay, TicTacToe, TicTacToeInvariants, WIN,
    WINNING_LINES, best_move, game_status, minimax,
};
