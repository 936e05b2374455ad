//! One interactive game from welcome banner to final verdict.

use crate::instructions::{WELCOME, instructions};
use crate::orchestrator::Orchestrator;
use crate::players::HumanCodebreaker;
use crate::prompt::{ChoiceReader, Role, ask_role, wants_instructions};
use crate::terminal::TerminalSink;
use anyhow::Result;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use strictly_mastermind::{GameConfig, GameSession, Outcome, SecretGenerator};
use tracing::{info, instrument};

/// Printed when the player picks a role the computer cannot fill.
pub const CODEMAKER_NOTICE: &str =
    "The computer cannot play codebreaker yet. Run again and choose codebreaker.";

/// Menu answers supplied up front instead of asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Skip the instructions question.
    pub skip_instructions: bool,
    /// Play this role without showing the role menu.
    pub role: Option<Role>,
}

/// A writer shared between the player prompts and the event output.
///
/// Both sides of the game write to the same terminal, so clones point
/// at one underlying writer.
#[derive(Debug, Default)]
pub struct SharedWriter<W> {
    inner: Rc<RefCell<W>>,
}

impl<W> SharedWriter<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(writer)),
        }
    }

    /// Runs `f` against the underlying writer.
    pub fn with_inner<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.inner.borrow())
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

/// Plays one game: welcome, optional instructions, role, then the turn loop.
///
/// Menu answers come from `choices`; guesses are read from `reader` and
/// everything else is written to `writer`. Returns `None` when the
/// player chose a role that ends the program without a game.
#[instrument(skip_all, fields(pins = config.pins(), colors = config.colors()))]
pub fn play<R, W>(
    config: GameConfig,
    options: PlayOptions,
    choices: &mut dyn ChoiceReader,
    reader: R,
    writer: W,
    generator: &mut SecretGenerator,
) -> Result<Option<Outcome>>
where
    R: BufRead + 'static,
    W: Write + Clone + 'static,
{
    let mut out = writer.clone();
    writeln!(out, "{}", WELCOME)?;

    if !options.skip_instructions && wants_instructions(choices)? {
        write!(out, "{}", instructions(&config))?;
    }

    let role = match options.role {
        Some(role) => role,
        None => ask_role(choices)?,
    };
    info!(%role, "Role selected");
    if role == Role::Codemaker {
        writeln!(out, "{}", CODEMAKER_NOTICE)?;
        out.flush()?;
        return Ok(None);
    }

    let session = GameSession::start(config, generator)?;
    let player = HumanCodebreaker::new("Player", &config, reader, writer.clone());
    let mut orchestrator =
        Orchestrator::new(session, Box::new(player), Box::new(TerminalSink::new(writer)));
    let outcome = orchestrator.run()?;

    info!(%outcome, won = outcome.is_win(), "Game finished");
    Ok(Some(outcome))
}
