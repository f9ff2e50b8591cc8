//! Optimal Play - command-line front end
//!
//! Reads a board from the command line and reports what perfect play does
//! from there.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{OutputFormat, PlayConfig};
use optimal_tictactoe::{Board, analyze, initial_state};
use report::PlayReport;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlayConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.unwrap_or(*config.format());
    let output = match cli.command {
        Command::Best { board } => run_best(&board, format)?,
        Command::Analyze { board } => run_analyze(&board, format)?,
        Command::Play { board } => run_play(board.unwrap_or_else(initial_state), format)?,
    };

    println!("{}", output);
    Ok(())
}

/// Search a board and report the best action
#[instrument(skip(board))]
fn run_best(board: &Board, format: OutputFormat) -> Result<String> {
    info!("Searching for best action");
    report::render_best(board, &analyze(board), format)
}

/// Search a board and report every action's value
#[instrument(skip(board))]
fn run_analyze(board: &Board, format: OutputFormat) -> Result<String> {
    info!("Analyzing position");
    report::render_analysis(board, &analyze(board), format)
}

/// Play a board out with best play on both sides
#[instrument(skip(board))]
fn run_play(board: Board, format: OutputFormat) -> Result<String> {
    info!("Playing game out");
    let game = PlayReport::play_out(board)?;
    report::render_play(&game, format)
}
