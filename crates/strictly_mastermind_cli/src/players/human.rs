//! Human player that types guesses as lines of digits.

use super::Codebreaker;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_mastermind::{Code, GameConfig, Turn};
use tracing::{debug, instrument};

/// Human player reading guesses from a line-oriented input.
///
/// Input that does not parse as a guess repeats the prompt; it never
/// reaches the session and never costs a try.
pub struct HumanCodebreaker<R, W> {
    name: String,
    pins: usize,
    colors: u8,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanCodebreaker<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, config: &GameConfig, reader: R, writer: W) -> Self {
        Self {
            name: name.into(),
            pins: config.pins(),
            colors: config.colors(),
            reader,
            writer,
        }
    }

    /// Consumes the player, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Codebreaker for HumanCodebreaker<R, W> {
    #[instrument(skip_all, fields(player = %self.name, try_number = history.len() + 1))]
    fn produce_guess(&mut self, history: &[Turn]) -> Result<Code> {
        let try_number = history.len() + 1;

        loop {
            write!(self.writer, "Enter your guess #{}: ", try_number)?;
            self.writer.flush()?;

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read guess")?;
            if read == 0 {
                anyhow::bail!("Input closed before a guess was entered");
            }

            match Code::parse_guess(&line, self.pins, self.colors) {
                Ok(guess) => {
                    debug!(%guess, "Guess entered");
                    return Ok(guess);
                }
                Err(e) => {
                    debug!(error = %e, input = line.trim_end(), "Rejected guess input");
                    writeln!(
                        self.writer,
                        "Please enter {} digits, each from 1 to {}.",
                        self.pins, self.colors
                    )?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
