//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::Symbol;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Symbol the human plays.
    #[serde(default = "default_symbol")]
    symbol: Symbol,

    /// Pause before the opponent answers, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Print minimax scores for the human's candidate moves.
    #[serde(default)]
    show_hints: bool,
}

#[instrument]
fn default_symbol() -> Symbol {
    Symbol::X
}

#[instrument]
fn default_thinking_delay_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            thinking_delay_ms: default_thinking_delay_ms(),
            show_hints: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(symbol = %config.symbol, delay_ms = config.thinking_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given. Otherwise loads [`DEFAULT_CONFIG_PATH`] when it
    /// exists and falls back to defaults when it does not.
    ///
    /// # Errors
    ///
    /// An explicitly named file that is missing or malformed is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides. `hints` only ever turns hints on.
    pub fn with_overrides(
        mut self,
        symbol: Option<Symbol>,
        thinking_delay_ms: Option<u64>,
        hints: bool,
    ) -> Self {
        if let Some(symbol) = symbol {
            self.symbol = symbol;
        }
        if let Some(ms) = thinking_delay_ms {
            self.thinking_delay_ms = ms;
        }
        self.show_hints |= hints;
        self
    }

    /// Opponent thinking delay.
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(config.thinking_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_lowercase_symbol_accepted() {
        let config: PlayConfig = toml::from_str("symbol = \"o\"").unwrap();
        assert_eq!(*config.symbol(), Symbol::O);
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default().with_overrides(Some(Symbol::O), Some(0), true);
        assert_eq!(*config.symbol(), Symbol::O);
        assert_eq!(config.thinking_delay(), Duration::ZERO);
        assert!(*config.show_hints());

        let unchanged = config.clone().with_overrides(None, None, false);
        assert_eq!(unchanged, config);
    }
}
