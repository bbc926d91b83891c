//! Core domain types for tic-tac-toe.

use super::Position;
use serde::{Deserialize, Serialize};

/// Marker held by a cell, or the side a player plays.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Move {
    /// No marker placed.
    #[default]
    #[strum(to_string = " ", serialize = "empty")]
    Empty,
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Move {
    /// Returns the opposing marker. `Empty` has no opponent and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Move::X => Move::O,
            Move::O => Move::X,
            Move::Empty => Move::Empty,
        }
    }

    /// Checks if this is the empty marker.
    pub fn is_empty(self) -> bool {
        matches!(self, Move::Empty)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Marker occupying the cell.
    marker: Move,
    /// Set only on the three cells of a detected winning line.
    winning: bool,
}

impl Cell {
    /// Creates a cell holding `marker`.
    pub fn new(marker: Move, winning: bool) -> Self {
        Self { marker, winning }
    }

    /// Returns the marker in this cell.
    pub fn marker(&self) -> Move {
        self.marker
    }

    /// Returns true if the cell is part of the winning line.
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    /// Checks if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
    }
}

/// Terminal status of a board, derived fresh on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Board is full with no winning line.
    Draw,
    /// Three equal markers in a row, column, or diagonal.
    Won {
        /// Marker that completed the line.
        winner: Move,
        /// The three cells of the winning line.
        line: [Position; 3],
    },
}

impl GameStatus {
    /// Returns true for `Draw` and `Won`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Move> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
