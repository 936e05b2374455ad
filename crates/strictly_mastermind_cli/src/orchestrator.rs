//! Game loop between a codebreaker and the session.

use crate::players::Codebreaker;
use anyhow::Result;
use std::sync::mpsc;
use strictly_mastermind::{Code, GameSession, Outcome, Turn};
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the output side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Session started.
    GameStarted {
        /// Pegs per code.
        pins: usize,
        /// Colors in the palette.
        colors: u8,
        /// Guesses allowed.
        max_tries: u32,
    },
    /// A guess was refused and no try was used.
    GuessRejected {
        /// Why the guess was refused.
        reason: String,
    },
    /// A guess was scored.
    FeedbackGiven(Turn),
    /// Game ended; the secret is revealed.
    GameOver {
        /// Final result.
        outcome: Outcome,
        /// The secret code.
        secret: Code,
        /// Guesses that were allowed.
        max_tries: u32,
    },
}

/// Receiver of game events.
pub trait EventSink {
    /// Delivers one event.
    fn emit(&mut self, event: GameEvent) -> Result<()>;
}

impl EventSink for mpsc::Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) -> Result<()> {
        self.send(event)
            .map_err(|_| anyhow::anyhow!("Event receiver dropped"))
    }
}

/// Orchestrates one game between a codebreaker and a secret.
pub struct Orchestrator {
    session: GameSession,
    codebreaker: Box<dyn Codebreaker>,
    sink: Box<dyn EventSink>,
    history: Vec<Turn>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        codebreaker: Box<dyn Codebreaker>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        Self {
            session,
            codebreaker,
            sink,
            history: Vec::new(),
        }
    }

    /// Runs the game loop until the session is won or lost.
    ///
    /// Guesses the session rejects are reported and asked for again
    /// without using a try. A session that is already over returns its
    /// outcome without emitting any event.
    #[instrument(skip(self), fields(codebreaker = %self.codebreaker.name()))]
    pub fn run(&mut self) -> Result<Outcome> {
        if let Some(outcome) = self.session.outcome() {
            debug!(%outcome, "Session already finished");
            return Ok(outcome);
        }

        info!("Starting game orchestration");
        let config = *self.session.config();
        self.sink.emit(GameEvent::GameStarted {
            pins: config.pins(),
            colors: config.colors(),
            max_tries: config.max_tries(),
        })?;

        loop {
            if let Some(outcome) = self.session.outcome() {
                let secret = self
                    .session
                    .revealed_secret()
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Finished session did not reveal its secret"))?;
                info!(%outcome, turns = self.history.len(), "Game over");
                self.sink.emit(GameEvent::GameOver {
                    outcome,
                    secret,
                    max_tries: config.max_tries(),
                })?;
                return Ok(outcome);
            }

            debug!(try_number = ?self.session.try_number(), "Waiting for guess");
            let guess = self.codebreaker.produce_guess(&self.history)?;

            match self.session.submit_guess(&guess) {
                Ok(turn) => {
                    self.sink.emit(GameEvent::FeedbackGiven(turn.clone()))?;
                    self.history.push(turn);
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, %guess, "Guess rejected");
                    self.sink.emit(GameEvent::GuessRejected {
                        reason: e.to_string(),
                    })?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Scored turns so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
