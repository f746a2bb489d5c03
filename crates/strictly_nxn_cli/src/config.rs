//! Configuration file for the console front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_nxn::{BoardSize, Glyphs, Player, SessionConfig};
use tracing::{debug, info, instrument};

/// Settings read from `strictly_nxn.toml`.
///
/// ```toml
/// first_player = "O"
/// default_size = 5
///
/// [glyphs]
/// x = "#"
/// o = "@"
/// empty = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Player who opens every game.
    first_player: Player,

    /// Board size used for every game instead of prompting.
    default_size: Option<BoardSize>,

    /// Square glyphs.
    glyphs: Glyphs,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            default_size: None,
            glyphs: Glyphs::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the glyphs can be told apart on a rendered board.
    ///
    /// Each glyph must be a single character; the player glyphs must be
    /// visible and all three must differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Glyphs { x, o, empty } = &self.glyphs;

        for (name, glyph) in [("x", x), ("o", o), ("empty", empty)] {
            if glyph.chars().count() != 1 {
                return Err(ConfigError::new(format!(
                    "Glyph '{}' must be a single character, got {:?}",
                    name, glyph
                )));
            }
        }
        if x.trim().is_empty() || o.trim().is_empty() {
            return Err(ConfigError::new("Player glyphs must be visible characters"));
        }
        if x == o || x == empty || o == empty {
            return Err(ConfigError::new(format!(
                "Glyphs must be distinct, got x={:?} o={:?} empty={:?}",
                x, o, empty
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, first_player: Option<Player>, size: Option<BoardSize>) -> Self {
        if let Some(player) = first_player {
            debug!(%player, "Overriding first player");
            self.first_player = player;
        }
        if let Some(size) = size {
            debug!(%size, "Overriding board size");
            self.default_size = Some(size);
        }
        self
    }

    /// Settings handed to the game session.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.first_player, self.glyphs.clone())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overrides_win() {
        let size = BoardSize::new(9).expect("valid size");
        let config = CliConfig::default().with_overrides(Some(Player::O), Some(size));
        assert_eq!(*config.first_player(), Player::O);
        assert_eq!(*config.default_size(), Some(size));
        assert_eq!(config.session_config().first_player(), Player::O);
    }

    #[test]
    fn test_rejects_duplicate_glyphs() {
        let config: CliConfig = toml::from_str("[glyphs]\nx = \"O\"\n").expect("valid toml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_wide_glyph() {
        let config: CliConfig = toml::from_str("[glyphs]\nx = \"XX\"\n").expect("valid toml");
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("single character"));
    }

    #[test]
    fn test_rejects_blank_player_glyph() {
        let config: CliConfig =
            toml::from_str("[glyphs]\no = \" \"\nempty = \".\"\n").expect("valid toml");
        assert!(config.validate().is_err());
    }
}
