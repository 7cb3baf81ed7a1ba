//! Gess - terminal front end
//!
//! Two players share stdin/stdout and enter moves in board notation.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gess::{GameEngine, GessConfig, Grid, SuicidePolicy, console};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            forbid_suicide,
        } => run_play(&config, forbid_suicide),
        Command::Show { json } => run_show(json),
    }
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play a game on the terminal
#[instrument(skip_all)]
fn run_play(config_path: &Path, forbid_suicide: bool) -> Result<()> {
    let mut config = GessConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if forbid_suicide {
        config = config.with_suicide(SuicidePolicy::Forbidden);
    }
    init_tracing(config.log_filter());

    info!(suicide = %config.suicide(), "Starting Gess");

    let mut engine = GameEngine::with_policy(*config.suicide());
    let stdin = std::io::stdin();
    console::run(&mut engine, stdin.lock(), std::io::stdout())?;

    info!(
        moves = engine.history().len(),
        outcome = %engine.outcome(),
        "Session ended"
    );
    Ok(())
}

/// Print the starting position
fn run_show(json: bool) -> Result<()> {
    init_tracing("warn");

    let grid = Grid::standard();
    if json {
        println!("{}", serde_json::to_string(&grid)?);
    } else {
        println!("{}", grid);
    }
    Ok(())
}
