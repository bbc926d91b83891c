//! Game configuration.

use crate::games::tictactoe::{Difficulty, Move};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Computer difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Marker played by the human (X or O).
    #[serde(default = "default_user_marker")]
    user_marker: Move,

    /// Pause before each computer move, in milliseconds.
    #[serde(default)]
    thinking_delay_ms: u64,

    /// Seed for the computer's random choices. Random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_user_marker() -> Move {
    Move::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            user_marker: default_user_marker(),
            thinking_delay_ms: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, user_marker = %config.user_marker, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_marker.is_empty() {
            return Err(ConfigError::new(
                "user_marker must be X or O".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
