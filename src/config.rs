//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension. Asked interactively when unset.
    #[serde(default)]
    dimension: Option<i64>,

    /// Consecutive marks needed to win.
    #[serde(default = "default_win_count")]
    win_count: i64,

    /// Name of the player using `x`. Asked interactively when unset.
    #[serde(default)]
    player_one: Option<String>,

    /// Name of the player using `o`. Asked interactively when unset.
    #[serde(default)]
    player_two: Option<String>,

    /// Colour marks on the board.
    #[serde(default)]
    color: bool,
}

fn default_win_count() -> i64 {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: None,
            win_count: default_win_count(),
            player_one: None,
            player_two: None,
            color: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(win_count = config.win_count, dimension = ?config.dimension, "Config loaded");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the dimension when `dimension` is set.
    pub fn with_dimension(mut self, dimension: Option<i64>) -> Self {
        if dimension.is_some() {
            self.dimension = dimension;
        }
        self
    }

    /// Overrides the win count when `win_count` is set.
    pub fn with_win_count(mut self, win_count: Option<i64>) -> Self {
        if let Some(win_count) = win_count {
            self.win_count = win_count;
        }
        self
    }

    /// Overrides the first player's name when `name` is set.
    pub fn with_player_one(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.player_one = name;
        }
        self
    }

    /// Overrides the second player's name when `name` is set.
    pub fn with_player_two(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.player_two = name;
        }
        self
    }

    /// Turns colour on. A flag can only enable it.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color |= color;
        self
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
