//! Mastermind - terminal codebreaker game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs, PlayArgs};
use std::io::{self, Write};
use strictly_mastermind::SecretGenerator;
use strictly_mastermind_cli::{
    PlayOptions, SharedWriter, TerminalChoices, WELCOME, instructions, play,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with game text
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Instructions { game } => run_instructions(game),
    }
}

/// Play one interactive game on the process terminal
#[instrument(skip_all, fields(seed = ?args.seed))]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = args.game.resolve_config()?;
    let mut generator = match args.seed {
        Some(seed) => SecretGenerator::seeded(seed),
        None => SecretGenerator::from_os_rng(),
    };
    let options = PlayOptions {
        skip_instructions: args.skip_instructions,
        role: args.role,
    };

    let outcome = play(
        config,
        options,
        &mut TerminalChoices::new(),
        io::stdin().lock(),
        SharedWriter::new(io::stdout()),
        &mut generator,
    )?;
    info!(?outcome, "Exiting");
    Ok(())
}

/// Print the rules for the configured game
#[instrument(skip_all)]
fn run_instructions(game: GameArgs) -> Result<()> {
    let config = game.resolve_config()?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", WELCOME)?;
    write!(stdout, "{}", instructions(&config))?;
    Ok(())
}
