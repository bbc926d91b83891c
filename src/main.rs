//! Noughts - terminal tic-tac-toe
//!
//! Play against the computer, or simulate batches of games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use noughts::{GameConfig, TicTacToe, play_session, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Computer pause in interactive play when neither flag nor file sets one.
const DEFAULT_DELAY_MS: u64 = 500;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game, delay_ms } => run_play(game, delay_ms),
        Command::Simulate { game, games, json } => run_simulate(game, games, json),
    }
}

/// Builds the game config from an optional file plus flag overrides.
#[instrument(skip(args))]
fn load_config(args: GameArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(marker) = args.marker {
        config = config.with_user_marker(marker);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    Ok(config)
}

/// Run an interactive game on stdin/stdout
fn run_play(args: GameArgs, delay_ms: Option<u64>) -> Result<()> {
    let has_file = args.config.is_some();
    let mut config = load_config(args)?;
    match delay_ms {
        Some(ms) => config = config.with_thinking_delay_ms(ms),
        None if !has_file => config = config.with_thinking_delay_ms(DEFAULT_DELAY_MS),
        None => {}
    }

    info!(difficulty = %config.difficulty(), marker = %config.user_marker(), "Starting game");
    let mut game = TicTacToe::new(&config);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play_session(&mut game, stdin.lock(), &mut stdout)
}

/// Run a batch simulation and print the report
fn run_simulate(args: GameArgs, games: usize, json: bool) -> Result<()> {
    let config = load_config(args)?;
    let report = simulate(&config, games);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else {
        println!("{}", report);
    }
    Ok(())
}
