//! Single-key menu prompts (instructions y/n, role m/b).

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, IsTerminal, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Which side of the board the human plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, clap::ValueEnum,
)]
pub enum Role {
    /// Human guesses the computer's secret.
    #[strum(to_string = "codebreaker")]
    Codebreaker,
    /// Human sets the secret and the computer guesses.
    #[strum(to_string = "codemaker")]
    Codemaker,
}

impl Role {
    /// Key that selects this role in the menu.
    pub fn key(self) -> char {
        match self {
            Role::Codebreaker => 'b',
            Role::Codemaker => 'm',
        }
    }

    /// Looks up the role for a menu key.
    pub fn from_key(key: char) -> Option<Self> {
        Role::iter().find(|role| role.key() == key)
    }
}

/// Source of single-character menu answers.
pub trait ChoiceReader {
    /// Shows `prompt` until the player answers with one of `choices`.
    ///
    /// Answers are compared in lowercase.
    fn read_choice(&mut self, prompt: &str, choices: &[char]) -> Result<char>;
}

/// Asks whether to print the instructions.
#[instrument(skip_all)]
pub fn wants_instructions(reader: &mut dyn ChoiceReader) -> Result<bool> {
    let answer = reader.read_choice("Would you like instructions (y/n)? ", &['y', 'n'])?;
    Ok(answer == 'y')
}

/// Asks which role the player takes.
#[instrument(skip_all)]
pub fn ask_role(reader: &mut dyn ChoiceReader) -> Result<Role> {
    let choices: Vec<char> = Role::iter().map(Role::key).collect();
    let answer = reader.read_choice(
        "Would you like to be the codemaker or codebreaker (m/b)? ",
        &choices,
    )?;
    Role::from_key(answer).ok_or_else(|| anyhow::anyhow!("Unknown role key '{}'", answer))
}

/// Reads answers from whole lines; the first non-space character counts.
pub struct LineChoices<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineChoices<R, W> {
    /// Creates a line-based reader.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the reader, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> ChoiceReader for LineChoices<R, W> {
    fn read_choice(&mut self, prompt: &str, choices: &[char]) -> Result<char> {
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line).context("Failed to read answer")? == 0 {
                anyhow::bail!("Input closed before an answer was given");
            }

            let answer = line
                .trim_start()
                .chars()
                .next()
                .map(|c| c.to_ascii_lowercase());
            match answer {
                Some(c) if choices.contains(&c) => return Ok(c),
                _ => debug!(input = line.trim_end(), "Unrecognized answer"),
            }
        }
    }
}

/// Reads answers from the process terminal.
///
/// On a real terminal each answer is a single key press read in raw
/// mode; otherwise (piped input) it falls back to [`LineChoices`].
#[derive(Debug, Default)]
pub struct TerminalChoices;

impl TerminalChoices {
    /// Creates a terminal reader.
    pub fn new() -> Self {
        Self
    }
}

impl ChoiceReader for TerminalChoices {
    #[instrument(skip(self))]
    fn read_choice(&mut self, prompt: &str, choices: &[char]) -> Result<char> {
        if !io::stdin().is_terminal() {
            debug!("Stdin is not a terminal, reading answers by line");
            return LineChoices::new(io::stdin().lock(), io::stdout()).read_choice(prompt, choices);
        }

        let mut stdout = io::stdout();
        loop {
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;

            let key = {
                let _raw = RawModeGuard::enable()?;
                read_key()?
            };
            writeln!(stdout)?;

            match key {
                Some(c) if choices.contains(&c) => return Ok(c),
                _ => debug!(?key, "Unrecognized key"),
            }
        }
    }
}

/// Waits for one key press; `None` for keys that are not characters.
fn read_key() -> Result<Option<char>> {
    loop {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read().context("Failed to read key")?
        {
            return match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    anyhow::bail!("Interrupted")
                }
                KeyCode::Char(c) => Ok(Some(c.to_ascii_lowercase())),
                _ => Ok(None),
            };
        }
    }
}

/// Keeps the terminal in raw mode while alive. Restores it on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to restore terminal mode");
        }
    }
}
