//! Computer opponents of selectable difficulty.

use super::{Board, Move, Position, search};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Chance of a mistake on the first Intermediate move of a game.
pub const INITIAL_MISTAKE_PROBABILITY: f64 = 0.5;

/// Growth of the mistake chance after each optimal Intermediate move.
pub const MISTAKE_PROBABILITY_STEP: f64 = 0.15;

/// Difficulty level of the computer opponent.
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random moves.
    #[default]
    Easy,
    /// Optimal play with at most one mistake per game.
    Intermediate,
    /// Always optimal. Cannot be beaten.
    Pro,
}

/// Pause taken before the computer answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinkingDelay(Duration);

impl ThinkingDelay {
    /// No pause.
    pub const NONE: ThinkingDelay = ThinkingDelay(Duration::ZERO);

    /// Creates a delay of `millis` milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Returns the pause length.
    pub fn duration(self) -> Duration {
        self.0
    }

    /// Blocks the calling thread for the configured pause.
    pub fn wait(self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Move-selection policy, with any per-game state it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Uniformly random available move.
    Easy,
    /// Minimax, except for one random mistake per game.
    Intermediate {
        /// Chance that the next move is a mistake. Zero once a mistake is made.
        mistake_probability: f64,
    },
    /// Minimax every time.
    Pro,
}

impl Strategy {
    /// Builds a fresh strategy for `difficulty`.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Easy,
            Difficulty::Intermediate => Strategy::Intermediate {
                mistake_probability: INITIAL_MISTAKE_PROBABILITY,
            },
            Difficulty::Pro => Strategy::Pro,
        }
    }

    /// Chooses a move for `marker` on the simulation `board`.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[instrument(skip(self, board, rng))]
    pub fn choose_move<R: Rng>(
        &mut self,
        board: &mut Board,
        marker: Move,
        rng: &mut R,
    ) -> Option<Position> {
        let available = board.available_moves();

        match self {
            Strategy::Easy => available.choose(rng).copied(),
            Strategy::Pro => search::best_move(board, &available, marker),
            Strategy::Intermediate {
                mistake_probability,
            } => {
                let sample: f64 = rng.random();
                let best = search::best_move(board, &available, marker)?;

                if sample < *mistake_probability {
                    debug!(sample, probability = *mistake_probability, "Making a mistake");
                    *mistake_probability = 0.0;
                    Some(non_best_move(&available, best, rng))
                } else {
                    if *mistake_probability != 0.0 {
                        *mistake_probability =
                            (*mistake_probability + MISTAKE_PROBABILITY_STEP).min(1.0);
                    }
                    Some(best)
                }
            }
        }
    }
}

/// Picks a random move other than `best`, or `best` when it is the only one.
fn non_best_move<R: Rng>(available: &[Position], best: Position, rng: &mut R) -> Position {
    let others: Vec<Position> = available.iter().copied().filter(|&pos| pos != best).collect();
    others.choose(rng).copied().unwrap_or(best)
}

/// The computer player: a strategy plus its thinking delay.
#[derive(Debug, Clone)]
pub struct Computer {
    strategy: Strategy,
    delay: ThinkingDelay,
}

impl Computer {
    /// Creates a computer with a fresh strategy for `difficulty`.
    #[instrument]
    pub fn new(difficulty: Difficulty, delay: ThinkingDelay) -> Self {
        Self {
            strategy: Strategy::for_difficulty(difficulty),
            delay,
        }
    }

    /// Returns the active strategy.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Waits out the thinking delay, then chooses a move.
    pub fn choose_move<R: Rng>(
        &mut self,
        board: &mut Board,
        marker: Move,
        rng: &mut R,
    ) -> Option<Position> {
        self.delay.wait();
        self.strategy.choose_move(board, marker, rng)
    }
}
