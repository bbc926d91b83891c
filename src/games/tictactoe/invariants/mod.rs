//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties of the controller state that must hold
//! after every applied move. They are testable independently and are
//! asserted in debug builds.

use super::TicTacToe;
use tracing::warn;

/// A property of the controller state that holds after every move.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, reporting every failure at once.
pub trait InvariantSet<S> {
    /// Returns the violated invariants, in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_markers;
pub mod outcome_consistent;
pub mod winning_cells;

pub use balanced_markers::BalancedMarkersInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use winning_cells::WinningCellsInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    BalancedMarkersInvariant,
    OutcomeConsistentInvariant,
    WinningCellsInvariant,
);

/// Asserts that all game invariants hold (panic on violation in debug builds).
pub fn assert_invariants(game: &TicTacToe) {
    let result = TicTacToeInvariants::check_all(game);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = %violation.description, "Invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Invariant violations: {:?}", result);
}
