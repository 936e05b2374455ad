//! Strictly Mastermind - pure game logic for the code-breaking game.
//!
//! A secret code of colored pegs is drawn at random; the codebreaker
//! submits guesses and receives, for each one, the number of pegs that
//! match exactly and the number that match in color only.
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{score, Code, Feedback};
//!
//! let secret = Code::from_values([3, 4, 5, 5]);
//! let guess = Code::from_values([1, 5, 4, 5]);
//! assert_eq!(score(&secret, &guess)?, Feedback::new(1, 2));
//! # Ok::<(), strictly_mastermind::MastermindError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod feedback;
mod secret;
mod session;
mod types;

pub use config::{ConfigError, GameConfig, MAX_COLORS};
pub use error::MastermindError;
pub use feedback::score;
pub use secret::SecretGenerator;
pub use session::{GameSession, Outcome, SessionState, Turn};
pub use types::{Code, Feedback, Peg};
