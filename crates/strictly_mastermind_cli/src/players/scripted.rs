//! Player that replays a fixed list of guesses.

use super::Codebreaker;
use anyhow::Result;
use std::collections::VecDeque;
use strictly_mastermind::{Code, Turn};
use tracing::debug;

/// Codebreaker that submits prepared guesses in order.
///
/// Useful for demos and for driving the game loop in tests.
pub struct ScriptedCodebreaker {
    name: String,
    guesses: VecDeque<Code>,
}

impl ScriptedCodebreaker {
    /// Creates a scripted player from guesses in submission order.
    pub fn new(name: impl Into<String>, guesses: impl IntoIterator<Item = Code>) -> Self {
        Self {
            name: name.into(),
            guesses: guesses.into_iter().collect(),
        }
    }

    /// Guesses not yet submitted.
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl Codebreaker for ScriptedCodebreaker {
    fn produce_guess(&mut self, history: &[Turn]) -> Result<Code> {
        let guess = self
            .guesses
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Script exhausted after {} turns", history.len()))?;
        debug!(player = %self.name, %guess, "Scripted guess");
        Ok(guess)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
