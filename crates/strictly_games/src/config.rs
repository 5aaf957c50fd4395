//! Game configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_connect_four::{ConnectFourEngine, Player};
use tracing::{debug, info, instrument};

/// Longest pause allowed before the opponent answers.
pub const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

/// Settings for a terminal Connect Four session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Marker played from the keyboard. The engine plays the other one.
    #[serde(default = "default_human")]
    human: Player,

    /// Marker that moves first in every game.
    #[serde(default = "default_first")]
    first: Player,

    /// Pause before the opponent answers, so the human sees their move land.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Seed for the opponent's tie-breaks. Random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_human() -> Player {
    Player::Red
}

#[instrument]
fn default_first() -> Player {
    Player::Red
}

#[instrument]
fn default_opponent_delay_ms() -> u64 {
    500
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `human` when set.
    pub human: Option<Player>,
    /// Replaces `first` when set.
    pub first: Option<Player>,
    /// Replaces `opponent_delay_ms` when set.
    pub opponent_delay_ms: Option<u64>,
    /// Replaces `seed` when set.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(human = %config.human, first = %config.first, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(human) = overrides.human {
            self.human = human;
        }
        if let Some(first) = overrides.first {
            self.first = first;
        }
        if let Some(delay) = overrides.opponent_delay_ms {
            self.opponent_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Marker controlled by the engine.
    pub fn opponent(&self) -> Player {
        self.human.opponent()
    }

    /// Opponent pause as a [`Duration`].
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Builds an engine for these settings.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> ConnectFourEngine {
        let engine = match self.seed {
            Some(seed) => ConnectFourEngine::seeded(seed),
            None => ConnectFourEngine::new(),
        };
        engine
            .with_starting_player(self.first)
            .with_opponent(self.opponent())
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(ConfigError::new(format!(
                "opponent_delay_ms must be at most {}, got {}",
                MAX_OPPONENT_DELAY_MS, self.opponent_delay_ms
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            first: default_first(),
            opponent_delay_ms: default_opponent_delay_ms(),
            seed: None,
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
