//! Board coordinates for tic-tac-toe moves.

use serde::Serialize;
use std::str::FromStr;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_DIMENSION: usize = 3;

/// A cell coordinate on the board, `(row, col)` in `[0,2]×[0,2]`.
///
/// Positions can only be built in range, so every board access through a
/// `Position` is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

/// Error building or parsing a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    /// Row or column lies outside the board.
    #[display("Position ({}, {}) is off the board (rows and columns are 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Input could not be read as a position.
    #[display("Cannot read '{}' as a position (use 1-9 or row,col)", _0)]
    Unparseable(#[error(not(source))] String),
}

impl Position {
    /// Top-left (keypad 1).
    pub const TOP_LEFT: Position = Position::at(0, 0);
    /// Top-center (keypad 2).
    pub const TOP_CENTER: Position = Position::at(0, 1);
    /// Top-right (keypad 3).
    pub const TOP_RIGHT: Position = Position::at(0, 2);
    /// Middle-left (keypad 4).
    pub const MIDDLE_LEFT: Position = Position::at(1, 0);
    /// Center (keypad 5).
    pub const CENTER: Position = Position::at(1, 1);
    /// Middle-right (keypad 6).
    pub const MIDDLE_RIGHT: Position = Position::at(1, 2);
    /// Bottom-left (keypad 7).
    pub const BOTTOM_LEFT: Position = Position::at(2, 0);
    /// Bottom-center (keypad 8).
    pub const BOTTOM_CENTER: Position = Position::at(2, 1);
    /// Bottom-right (keypad 9).
    pub const BOTTOM_RIGHT: Position = Position::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position, rejecting coordinates off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, PositionError> {
        if row < BOARD_DIMENSION && col < BOARD_DIMENSION {
            Ok(Self::at(row, col))
        } else {
            Err(PositionError::OutOfRange { row, col })
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts position to its row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_DIMENSION + self.col
    }

    /// Creates position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses a keypad number (`1`-`9`, row-major) or a `row,col` pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || PositionError::Unparseable(s.to_string());
        let trimmed = s.trim();

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [keypad] => {
                let number: usize = keypad.parse().map_err(|_| unparseable())?;
                number
                    .checked_sub(1)
                    .and_then(Self::from_index)
                    .ok_or_else(unparseable)
            }
            [row, col] => {
                let row = row.parse().map_err(|_| unparseable())?;
                let col = col.parse().map_err(|_| unparseable())?;
                Self::new(row, col)
            }
            _ => Err(unparseable()),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
