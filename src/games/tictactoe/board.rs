//! The 3x3 grid of cells.

use super::position::BOARD_DIMENSION;
use super::types::{Cell, GameStatus, Move};
use super::{Position, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board addressed by [`Position`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; BOARD_DIMENSION]; BOARD_DIMENSION],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies another board's markers into a fresh board.
    ///
    /// Winning flags are not carried over, so the copy is a clean simulation
    /// board for search.
    #[instrument(skip(other))]
    pub fn copy_of(other: &Board) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            board.place(pos, other.cell(pos).marker());
        }
        board
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Default::default();
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.grid[pos.row()][pos.col()]
    }

    /// Overwrites the cell at `pos`.
    pub fn set_cell(&mut self, pos: Position, marker: Move, winning: bool) {
        self.grid[pos.row()][pos.col()] = Cell::new(marker, winning);
    }

    /// Places `marker` at `pos` as an ordinary (non-winning) cell.
    pub fn place(&mut self, pos: Position, marker: Move) {
        self.set_cell(pos, marker, false);
    }

    /// Returns every empty position in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect()
    }

    /// Counts cells holding `marker`.
    pub fn count(&self, marker: Move) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).marker() == marker)
            .count()
    }

    /// Derives the current status from the grid.
    pub fn status(&self) -> GameStatus {
        rules::game_status(self)
    }

    /// Returns the rows of cells.
    pub fn rows(&self) -> &[[Cell; BOARD_DIMENSION]; BOARD_DIMENSION] {
        &self.grid
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with keypad numbers in empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.marker() {
                    Move::Empty => (row * BOARD_DIMENSION + col + 1).to_string(),
                    marker => marker.to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if row + 1 < BOARD_DIMENSION {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
