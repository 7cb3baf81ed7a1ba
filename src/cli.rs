//! Command-line interface for gess.

use clap::{Parser, Subcommand};

/// Gess - the chess/go hybrid on a 20x20 board
#[derive(Parser, Debug)]
#[command(name = "gess")]
#[command(about = "Play Gess in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play {
        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "gess.toml")]
        config: std::path::PathBuf,

        /// Reject moves that destroy the mover's own last ring
        #[arg(long)]
        forbid_suicide: bool,
    },

    /// Print the starting position
    Show {
        /// Print the board as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
