//! Game configuration and word-list loading.

use crate::words::DEFAULT_WORDS;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_unscramble::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, SetupError, WordPool};
use tracing::{debug, info, instrument};

/// Settings for a game, usually read from a TOML file.
///
/// ```toml
/// max_rounds = 10
/// score_increase = 20
/// words_file = "words.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Words per session.
    #[serde(default = "default_max_rounds")]
    max_rounds: usize,

    /// Points per correct guess.
    #[serde(default = "default_score_increase")]
    score_increase: u32,

    /// Word list, one word per line. Built-in words are used when absent.
    #[serde(default)]
    words_file: Option<PathBuf>,
}

#[instrument]
fn default_max_rounds() -> usize {
    DEFAULT_MAX_ROUNDS
}

#[instrument]
fn default_score_increase() -> u32 {
    DEFAULT_SCORE_INCREASE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            score_increase: default_score_increase(),
            words_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            max_rounds = config.max_rounds,
            score_increase = config.score_increase,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument(skip(path))]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the word list path.
    pub fn with_words_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_file = Some(path.into());
        self
    }

    /// Validates the rules for a session.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        Ok(GameConfig::new(self.max_rounds, self.score_increase)?)
    }

    /// Reads and validates the word pool, falling back to the built-in list.
    #[instrument(skip(self))]
    pub fn word_pool(&self) -> Result<WordPool, ConfigError> {
        let pool = match &self.words_file {
            Some(path) => WordPool::new(load_words(path)?)?,
            None => WordPool::new(DEFAULT_WORDS)?,
        };
        info!(words = pool.len(), "Word pool loaded");
        Ok(pool)
    }
}

/// Reads a word list: one word per line, ignoring blank lines and `#` comments.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read word list: {}", e)))?;
    let words = parse_words(&content);
    debug!(words = words.len(), "Word list read");
    Ok(words)
}

/// Splits word-list text into entries.
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
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

impl From<SetupError> for ConfigError {
    #[track_caller]
    fn from(err: SetupError) -> Self {
        Self::new(format!("Invalid game setup: {}", err))
    }
}
