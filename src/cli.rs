//! Command-line interface for tictac.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Difficulty, Mode, Player};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with an easy, medium or hard computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play(PlayArgs),

    /// Pit two computer difficulties against each other
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty of the first computer
        #[arg(long, default_value = "hard")]
        computer: Difficulty,

        /// Difficulty of the second computer
        #[arg(long, default_value = "easy")]
        challenger: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for an interactive game
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// two-player or vs-computer
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Symbol for the human in a computer match (x or o)
    #[arg(short, long)]
    pub symbol: Option<Player>,

    /// Computer strength: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
