//! Game session state machine.
//!
//! A session owns the secret and walks through
//! `AwaitingGuess(1) -> AwaitingGuess(2) -> ... -> Won | Lost`.
//! Malformed guesses are rejected without advancing the try counter.

use crate::config::GameConfig;
use crate::error::MastermindError;
use crate::feedback::score;
use crate::secret::SecretGenerator;
use crate::types::{Code, Feedback};
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the guess numbered `try_number` (1-based).
    AwaitingGuess {
        /// Try the next guess will consume.
        try_number: u32,
    },
    /// The secret was guessed on try `tries`.
    Won {
        /// Tries used, including the winning one.
        tries: u32,
    },
    /// Every try was used without finding the secret.
    Lost,
}

/// Terminal result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Codebreaker found the secret.
    Won {
        /// Tries used.
        tries: u32,
    },
    /// Codebreaker ran out of tries.
    Lost,
}

impl Outcome {
    /// True for a win.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { tries } => write!(f, "Won in {} tries", tries),
            Outcome::Lost => write!(f, "Lost"),
        }
    }
}

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Turn {
    /// 1-based try this guess consumed.
    try_number: u32,
    /// The guess.
    guess: Code,
    /// Its score against the secret.
    feedback: Feedback,
}

/// A single codebreaker game against a fixed secret.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    secret: Code,
    state: SessionState,
}

impl GameSession {
    /// Creates a session around an existing secret.
    ///
    /// # Errors
    ///
    /// - [`MastermindError::InvalidConfiguration`] if the configuration is unusable.
    /// - [`MastermindError::LengthMismatch`] or [`MastermindError::OutOfRangePeg`]
    ///   if the secret does not fit the configuration.
    #[instrument(skip(secret))]
    pub fn new(config: GameConfig, secret: Code) -> Result<Self, MastermindError> {
        config.validate()?;
        secret.validate(config.pins(), config.colors())?;
        info!(
            pins = config.pins(),
            colors = config.colors(),
            max_tries = config.max_tries(),
            "Starting game session"
        );
        Ok(Self {
            config,
            secret,
            state: SessionState::AwaitingGuess { try_number: 1 },
        })
    }

    /// Creates a session with a freshly drawn secret.
    #[instrument(skip(generator))]
    pub fn start<R: Rng>(
        config: GameConfig,
        generator: &mut SecretGenerator<R>,
    ) -> Result<Self, MastermindError> {
        config.validate()?;
        let secret = generator.make_code(config.pins(), config.colors())?;
        Self::new(config, secret)
    }

    /// Scores a guess and advances the session.
    ///
    /// A win is checked before the try limit, so a correct guess on the
    /// last try still wins.
    ///
    /// # Errors
    ///
    /// - [`MastermindError::GameOver`] if the session already ended.
    /// - A recoverable guess error (see [`MastermindError::is_recoverable`])
    ///   if the guess has the wrong length or an out-of-palette peg. The
    ///   state is unchanged and no try is consumed.
    #[instrument(skip_all, fields(guess = %guess, state = ?self.state))]
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Turn, MastermindError> {
        let try_number = match self.state {
            SessionState::AwaitingGuess { try_number } => try_number,
            SessionState::Won { .. } | SessionState::Lost => {
                warn!("Guess submitted to finished session");
                return Err(MastermindError::GameOver);
            }
        };

        guess.validate(self.config.pins(), self.config.colors())?;
        let feedback = score(&self.secret, guess)?;

        self.state = if feedback.is_solved(self.config.pins()) {
            info!(try_number, "Secret guessed");
            SessionState::Won { tries: try_number }
        } else if try_number >= self.config.max_tries() {
            info!(try_number, "Out of tries");
            SessionState::Lost
        } else {
            SessionState::AwaitingGuess {
                try_number: try_number + 1,
            }
        };
        debug!(%feedback, next = ?self.state, "Guess scored");

        Ok(Turn::new(try_number, guess.clone(), feedback))
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Try the next guess will consume, while the game is running.
    pub fn try_number(&self) -> Option<u32> {
        match self.state {
            SessionState::AwaitingGuess { try_number } => Some(try_number),
            SessionState::Won { .. } | SessionState::Lost => None,
        }
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::AwaitingGuess { .. } => None,
            SessionState::Won { tries } => Some(Outcome::Won { tries }),
            SessionState::Lost => Some(Outcome::Lost),
        }
    }

    /// True once the session reached `Won` or `Lost`.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Session parameters.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret, available only after the game ended.
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.is_over().then_some(&self.secret)
    }
}
