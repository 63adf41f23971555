//! Terminal front end: one human seat against the computer, or two computers.

mod display;
mod input;
mod transcript;

use anyhow::{Context, Result};
use clap::Parser;
use display::TerminalDisplay;
use input::PromptMoveSource;
use onecard_core::{GameConfig, GameState, MoveSource, RandomMoveSource, Session};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "onecard", version, about = "Two-player One Card in the terminal")]
struct Cli {
    /// Seed for the shuffle and the computer's choices (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play both seats
    #[arg(long)]
    auto: bool,

    /// Keep earlier output instead of clearing the screen before each render
    #[arg(long)]
    no_clear: bool,

    /// Write the game's event log to this file as JSON lines
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::with_seed(cli.seed.unwrap_or_else(rand::random));
    let mut session = if cli.auto {
        Session::automated(&config)
    } else {
        human_vs_computer(&config)?
    };

    let mut display = TerminalDisplay::stdout(!cli.no_clear);
    let summary = session
        .run(&mut display)
        .context("game stopped on an internal fault")?;
    println!(
        "Player {} wins after {} turns (seed {}).",
        summary.winner + 1,
        summary.turns,
        summary.seed
    );

    if let Some(path) = cli.transcript.as_deref() {
        transcript::save_transcript(path, session.state().log.events())?;
        println!("transcript written to {}", path.display());
    }
    Ok(())
}

fn human_vs_computer(config: &GameConfig) -> Result<Session> {
    let mut state = GameState::new(config);
    let computer = RandomMoveSource::new(state.fork_rng());
    let seats: Vec<Box<dyn MoveSource>> =
        vec![Box::new(PromptMoveSource::stdin()), Box::new(computer)];
    Ok(Session::new(state, seats)?)
}
