//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts::{Difficulty, Move};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a minimax computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command. Flags override the config file.
#[derive(Args, Debug)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Computer difficulty (easy, intermediate, pro)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Marker you play (X or O)
    #[arg(short, long)]
    pub marker: Option<Move>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Shared game settings
        #[command(flatten)]
        game: GameArgs,

        /// Pause before each computer move, in milliseconds [default: 500]
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Play many games against a random opponent and report the tally
    Simulate {
        /// Shared game settings
        #[command(flatten)]
        game: GameArgs,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
