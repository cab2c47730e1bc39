//! Game configuration for the terminal frontend.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_rules::{DEFAULT_PLAYER1, DEFAULT_PLAYER2};
use tracing::{debug, info, instrument};

/// Environment variable overriding player 1's name.
pub const PLAYER1_ENV: &str = "TICTACTOE_PLAYER1";

/// Environment variable overriding player 2's name.
pub const PLAYER2_ENV: &str = "TICTACTOE_PLAYER2";

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name for player 1 (plays X).
    #[serde(default = "default_player1")]
    player1: String,

    /// Name for player 2 (plays O).
    #[serde(default = "default_player2")]
    player2: String,

    /// Ring the terminal bell for move and victory cues.
    #[serde(default = "default_true")]
    sound: bool,

    /// Use ANSI colors for marks and highlights.
    #[serde(default = "default_true")]
    color: bool,
}

#[instrument]
fn default_player1() -> String {
    DEFAULT_PLAYER1.to_string()
}

#[instrument]
fn default_player2() -> String {
    DEFAULT_PLAYER2.to_string()
}

#[instrument]
fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
            sound: true,
            color: true,
        }
    }
}

/// Replaces a missing or blank name with `fallback`.
#[instrument]
pub fn resolve_name(name: Option<&str>, fallback: &str) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => fallback.to_string(),
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player1 = %config.player1, player2 = %config.player2, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config.normalized())
    }

    /// Applies `TICTACTOE_PLAYER1` / `TICTACTOE_PLAYER2` when set.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies name overrides looked up by environment variable name.
    ///
    /// Unset and blank values leave the configured name alone.
    #[instrument(skip(self, lookup))]
    pub fn with_overrides_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup_name = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let player1 = lookup_name(PLAYER1_ENV);
        let player2 = lookup_name(PLAYER2_ENV);
        if player1.is_some() || player2.is_some() {
            debug!(?player1, ?player2, "Applying environment overrides");
        }
        self.with_names(player1.as_deref(), player2.as_deref())
    }

    /// Overrides player names. `None` keeps the current name, a blank name
    /// falls back to the slot default.
    #[instrument(skip(self))]
    pub fn with_names(mut self, player1: Option<&str>, player2: Option<&str>) -> Self {
        if let Some(name) = player1 {
            self.player1 = name.to_string();
        }
        if let Some(name) = player2 {
            self.player2 = name.to_string();
        }
        self.normalized()
    }

    /// Sets whether cues ring the terminal bell.
    #[instrument(skip(self))]
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// Sets whether output uses ANSI colors.
    #[instrument(skip(self))]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[instrument(skip(self))]
    fn normalized(mut self) -> Self {
        self.player1 = resolve_name(Some(self.player1.as_str()), DEFAULT_PLAYER1);
        self.player2 = resolve_name(Some(self.player2.as_str()), DEFAULT_PLAYER2);
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player1(), "Player 1");
        assert_eq!(config.player2(), "Player 2");
        assert!(*config.sound());
        assert!(*config.color());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml("player1 = \"Ann\"\nsound = false\n").unwrap();
        assert_eq!(config.player1(), "Ann");
        assert_eq!(config.player2(), "Player 2");
        assert!(!*config.sound());
        assert!(*config.color());
    }

    #[test]
    fn test_blank_names_fall_back() {
        let config = GameConfig::from_toml("player1 = \"  \"\nplayer2 = \"\"\n").unwrap();
        assert_eq!(config.player1(), "Player 1");
        assert_eq!(config.player2(), "Player 2");
    }

    #[test]
    fn test_with_names() {
        let config = GameConfig::default().with_names(None, Some("Bo"));
        assert_eq!(config.player1(), "Player 1");
        assert_eq!(config.player2(), "Bo");
    }

    #[test]
    fn test_overrides_replace_configured_names() {
        let config = GameConfig::from_toml("player1 = \"Ann\"").unwrap();
        let config = config.with_overrides_from(|key| match key {
            PLAYER2_ENV => Some("Bo".to_string()),
            _ => None,
        });
        assert_eq!(config.player1(), "Ann");
        assert_eq!(config.player2(), "Bo");
    }

    #[test]
    fn test_blank_override_keeps_configured_name() {
        let config = GameConfig::from_toml("player1 = \"Ann\"\nplayer2 = \"Bo\"").unwrap();
        let config = config.with_overrides_from(|key| match key {
            PLAYER1_ENV => Some(String::new()),
            PLAYER2_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.player1(), "Ann");
        assert_eq!(config.player2(), "Bo");
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = GameConfig::from_toml("sound = \"loud\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_resolve_name() {
        assert_eq!(resolve_name(None, "Player 1"), "Player 1");
        assert_eq!(resolve_name(Some(" Ann "), "Player 1"), "Ann");
        assert_eq!(resolve_name(Some(""), "Player 2"), "Player 2");
    }
}
