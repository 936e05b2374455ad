//! Game configuration: pin count, palette size, and try limit.

use crate::error::MastermindError;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest palette a player can type: guesses are entered one digit per peg.
pub const MAX_COLORS: u8 = 9;

/// Fixed parameters of one game session.
///
/// Loaded from TOML with any missing key falling back to the classic
/// game (4 pins, 6 colors, 12 tries). Unknown keys are an error:
///
/// ```toml
/// pins = 5
/// colors = 8
/// max_tries = 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Pegs per code.
    pins: usize,
    /// Colors in the palette; pegs take values `1..=colors`.
    colors: u8,
    /// Guesses allowed before the game is lost.
    max_tries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pins: 4,
            colors: 6,
            max_tries: 12,
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

        info!(
            pins = config.pins,
            colors = config.colors,
            max_tries = config.max_tries,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that a session can be played with these parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MastermindError::InvalidConfiguration`] when any count is
    /// zero or the palette exceeds [`MAX_COLORS`].
    #[instrument]
    pub fn validate(&self) -> Result<(), MastermindError> {
        if self.pins == 0 {
            return Err(MastermindError::invalid_configuration(
                "number of pins must be positive",
            ));
        }
        if self.colors == 0 {
            return Err(MastermindError::invalid_configuration(
                "number of colors must be positive",
            ));
        }
        if self.colors > MAX_COLORS {
            return Err(MastermindError::invalid_configuration(format!(
                "number of colors must be at most {}",
                MAX_COLORS
            )));
        }
        if self.max_tries == 0 {
            return Err(MastermindError::invalid_configuration(
                "maximum tries must be positive",
            ));
        }
        Ok(())
    }

    /// Pegs per code.
    pub fn pins(&self) -> usize {
        self.pins
    }

    /// Colors in the palette.
    pub fn colors(&self) -> u8 {
        self.colors
    }

    /// Guesses allowed.
    pub fn max_tries(&self) -> u32 {
        self.max_tries
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.pins(), 4);
        assert_eq!(config.colors(), 6);
        assert_eq!(config.max_tries(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setters_chain() {
        let config = GameConfig::default()
            .with_pins(5)
            .with_colors(8)
            .with_max_tries(3);
        assert_eq!((config.pins(), config.colors(), config.max_tries()), (5, 8, 3));
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        for config in [
            GameConfig::default().with_pins(0),
            GameConfig::default().with_colors(0),
            GameConfig::default().with_colors(10),
            GameConfig::default().with_max_tries(0),
        ] {
            assert!(matches!(
                config.validate(),
                Err(MastermindError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_from_file_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pins = 5\nmax_tries = 8").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::default().with_pins(5).with_max_tries(8));
    }

    #[test]
    fn test_from_file_missing() {
        let err = GameConfig::from_file("/nonexistent/mastermind.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pins = \"four\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file_unknown_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tries = 3").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.message.contains("tries"));
    }
}
