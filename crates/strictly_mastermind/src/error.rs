//! Error taxonomy for Mastermind game logic.

use tracing::instrument;

/// Error raised by configuration, scoring, or session transitions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MastermindError {
    /// Pin count, color count, or try limit is unusable.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// Two codes of different length were compared.
    #[display("Code length mismatch: expected {expected} pegs, got {actual}")]
    LengthMismatch {
        /// Length the session expects.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A peg value falls outside the palette.
    #[display("Peg {value} is outside the palette 1-{colors}")]
    OutOfRangePeg {
        /// Offending peg value.
        value: u8,
        /// Number of colors in the palette.
        colors: u8,
    },

    /// Guess text did not contain enough digits.
    #[display("Guess needs {expected} digits, found {found}")]
    MalformedGuess {
        /// Digits required.
        expected: usize,
        /// Digits present in the input.
        found: usize,
    },

    /// A guess was submitted after the session ended.
    #[display("Game is already over")]
    GameOver,
}

impl MastermindError {
    /// Creates an invalid-configuration error.
    #[instrument(skip(message))]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns true for bad guesses that should be re-prompted
    /// without consuming a try.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::OutOfRangePeg { .. } | Self::MalformedGuess { .. }
        )
    }
}

impl std::error::Error for MastermindError {}
