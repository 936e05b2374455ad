//! Plain-text rendering of game events.

use crate::orchestrator::{EventSink, GameEvent};
use anyhow::Result;
use std::io::Write;
use strictly_mastermind::Outcome;

/// Writes game events as sentences to a terminal or any writer.
pub struct TerminalSink<W> {
    writer: W,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for TerminalSink<W> {
    fn emit(&mut self, event: GameEvent) -> Result<()> {
        match event {
            GameEvent::GameStarted {
                pins,
                colors,
                max_tries,
            } => writeln!(
                self.writer,
                "The secret code is {} digits long and uses the digits 1-{}. \
                 You have {} tries to guess it. Good luck!",
                pins, colors, max_tries
            )?,
            GameEvent::GuessRejected { reason } => {
                writeln!(self.writer, "That guess was not accepted ({}).", reason)?
            }
            GameEvent::FeedbackGiven(turn) => {
                let feedback = turn.feedback();
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "Try {}: {} correct in the correct position, {} correct but in the wrong position.",
                    turn.try_number(),
                    feedback.exact(),
                    feedback.value_only()
                )?;
                writeln!(self.writer)?;
            }
            GameEvent::GameOver {
                outcome: Outcome::Won { tries },
                secret,
                ..
            } => {
                let noun = if tries == 1 { "try" } else { "tries" };
                writeln!(self.writer, "You guessed the code, {}, in {} {}!", secret, tries, noun)?
            }
            GameEvent::GameOver {
                outcome: Outcome::Lost,
                secret,
                max_tries,
            } => writeln!(
                self.writer,
                "Sorry, you did not guess the code, {}, within the allotted {} tries.",
                secret, max_tries
            )?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
