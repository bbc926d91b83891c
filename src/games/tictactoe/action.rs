//! First-class move records for tic-tac-toe.
//!
//! Placements are domain events: they are kept in order as the game's
//! history and can be serialized for presentation layers.

use super::{Move, Position};
use serde::Serialize;

/// A marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Placement {
    /// The marker placed.
    pub marker: Move,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// Why a move request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a move request.
///
/// Invalid requests are not errors: they are ignored and the state is left
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was placed (and any computer reply played).
    Applied,
    /// The request was ignored.
    Ignored(IgnoredReason),
}

impl MoveOutcome {
    /// Returns true if the move was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}
