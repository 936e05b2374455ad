//! Command-line interface for the mastermind binary.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_mastermind::GameConfig;
use strictly_mastermind_cli::Role;
use tracing::{debug, instrument};

/// Mastermind - break the computer's secret code
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Guess the computer's secret code of colored pegs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game as codebreaker
    Play(PlayArgs),

    /// Print the rules and exit
    Instructions {
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Options for `play`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Seed for the secret code (repeatable games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Role to play, skipping the role menu
    #[arg(long, value_enum)]
    pub role: Option<Role>,

    /// Skip the instructions question
    #[arg(long)]
    pub skip_instructions: bool,
}

/// Game parameters shared by every command.
#[derive(Args, Debug, Default)]
pub struct GameArgs {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pegs per code (overrides the config file)
    #[arg(long)]
    pub pins: Option<usize>,

    /// Colors per peg, 1-9 (overrides the config file)
    #[arg(long)]
    pub colors: Option<u8>,

    /// Guesses allowed (overrides the config file)
    #[arg(long)]
    pub tries: Option<u32>,
}

impl GameArgs {
    /// Builds the configuration: defaults, then the file, then flags.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(pins) = self.pins {
            config = config.with_pins(pins);
        }
        if let Some(colors) = self.colors {
            config = config.with_colors(colors);
        }
        if let Some(tries) = self.tries {
            config = config.with_max_tries(tries);
        }

        debug!(?config, "Resolved game configuration");
        config.validate()?;
        Ok(config)
    }
}
