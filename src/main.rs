//! tictac - terminal tic-tac-toe
//!
//! Interactive play on stdin/stdout, or headless computer-vs-computer runs.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{AppConfig, Cli, Command, Orchestrator, PlayArgs, render, simulate};
use tictac_engine::{Difficulty, MatchSetup, Mode, Opponent, Player};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Simulate {
            games,
            computer,
            challenger,
            seed,
        } => run_simulate(games, computer, challenger, seed),
    }
}

/// Run an interactive session on the terminal
#[instrument(skip(args))]
async fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(ms) = args.think_ms {
        config = config.with_think_delay_ms(ms);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mode = args.mode.or(*config.mode()).unwrap_or(Mode::VsComputer);
    let mut setup = MatchSetup::new().mode(mode);
    if mode == Mode::VsComputer {
        setup = setup
            .symbol(args.symbol.or(*config.human()).unwrap_or(Player::X))
            .difficulty(
                args.difficulty
                    .or(*config.difficulty())
                    .unwrap_or(Difficulty::Hard),
            );
    }
    let match_config = setup.build().context("Invalid match settings")?;

    let opponent = match config.seed() {
        Some(seed) => Opponent::seeded(*seed),
        None => Opponent::new(),
    };

    info!(?match_config, think_delay_ms = config.think_delay_ms(), "Starting game");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render(&event) {
                println!("{}", text);
            }
        }
    });

    println!("{}", tictac::HELP);
    let mut orchestrator =
        Orchestrator::new(match_config, opponent, config.think_delay(), event_tx);
    let result = orchestrator.run(BufReader::new(tokio::io::stdin())).await;

    let scores = *orchestrator.state().scores();

    // Closing the channel lets the renderer drain and exit
    drop(orchestrator);
    renderer.await?;

    println!("Final score  {}", scores);
    result
}

/// Run headless matches and print the tally
#[instrument]
fn run_simulate(
    games: u32,
    computer: Difficulty,
    challenger: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let report = simulate(games, computer, challenger, seed)?;
    println!("{}", report);
    Ok(())
}
