//! Batch games of the computer against a random opponent.

use crate::config::GameConfig;
use crate::games::tictactoe::{Difficulty, Move, TicTacToe};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::{info, instrument};

/// Tally of simulated games, from the computer's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SimulationReport {
    /// Difficulty the computer played at.
    difficulty: Difficulty,
    /// Games played.
    games: usize,
    /// Games the computer won.
    computer_wins: usize,
    /// Games the random opponent won.
    computer_losses: usize,
    /// Drawn games.
    draws: usize,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games at {}: {} won, {} lost, {} drawn",
            self.games, self.difficulty, self.computer_wins, self.computer_losses, self.draws
        )
    }
}

/// Plays `games` games of the computer against a uniformly random opponent.
///
/// The opening side alternates between games. The thinking delay is skipped.
#[instrument(skip(config), fields(difficulty = %config.difficulty()))]
pub fn simulate(config: &GameConfig, games: usize) -> SimulationReport {
    let config = config.clone().with_thinking_delay_ms(0);
    let mut opponent_rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let mut report = SimulationReport {
        difficulty: *config.difficulty(),
        games,
        computer_wins: 0,
        computer_losses: 0,
        draws: 0,
    };

    let mut game = TicTacToe::new(&config);
    for round in 0..games {
        if round > 0 {
            game.reset_game_state();
        }

        while !game.game_ended() {
            let available = game.board().available_moves();
            let Some(&position) = available.choose(&mut opponent_rng) else {
                break;
            };
            game.make_move(position);
        }

        match game.winner() {
            Move::Empty => report.draws += 1,
            winner if winner == game.computer_marker() => report.computer_wins += 1,
            _ => report.computer_losses += 1,
        }
    }

    info!(%report, "Simulation finished");
    report
}
