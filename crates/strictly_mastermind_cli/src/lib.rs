//! Strictly Mastermind terminal game.
//!
//! Wires the pure game logic from `strictly_mastermind` to players and
//! a terminal.
//!
//! # Architecture
//!
//! - **Players**: [`Codebreaker`] strategies (human keyboard input, scripted)
//! - **Orchestrator**: the turn loop, reporting [`GameEvent`]s to an [`EventSink`]
//! - **Terminal**: text rendering of events and single-key menu prompts
//! - **App**: [`play`], the full interactive flow over any reader and writer
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{Code, GameConfig, GameSession, Outcome};
//! use strictly_mastermind_cli::{Orchestrator, ScriptedCodebreaker, TerminalSink};
//!
//! # fn example() -> anyhow::Result<()> {
//! let session = GameSession::new(GameConfig::default(), Code::from_values([1, 2, 3, 4]))?;
//! let player = ScriptedCodebreaker::new("Script", [Code::from_values([1, 2, 3, 4])]);
//! let mut game = Orchestrator::new(
//!     session,
//!     Box::new(player),
//!     Box::new(TerminalSink::new(std::io::sink())),
//! );
//! assert_eq!(game.run()?, Outcome::Won { tries: 1 });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod instructions;
mod orchestrator;
mod players;
mod prompt;
mod terminal;

pub use app::{CODEMAKER_NOTICE, PlayOptions, SharedWriter, play};
pub use instructions::{WELCOME, instructions};
pub use orchestrator::{EventSink, GameEvent, Orchestrator};
pub use players::{Codebreaker, HumanCodebreaker, ScriptedCodebreaker};
pub use prompt::{ChoiceReader, LineChoices, Role, TerminalChoices, ask_role, wants_instructions};
pub use terminal::TerminalSink;
