//! Codebreaker trait and implementations.

mod human;
mod scripted;

pub use human::HumanCodebreaker;
pub use scripted::ScriptedCodebreaker;

use anyhow::Result;
use strictly_mastermind::{Code, Turn};

/// Trait for players that can produce guesses.
///
/// The game loop only sees this trait, so it does not care whether the
/// guesses come from a keyboard or from a list.
pub trait Codebreaker {
    /// Gets the next guess from this player.
    ///
    /// `history` holds every scored turn so far, oldest first. Guesses
    /// the session rejected are not part of it.
    fn produce_guess(&mut self, history: &[Turn]) -> Result<Code>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
