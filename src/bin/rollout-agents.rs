//! rollout-agents CLI - Play and inspect flat random-rollout agents
//!
//! This CLI provides:
//! - Matches between random and rollout agents at tic-tac-toe
//! - Per-move rollout scores for a single position

use anyhow::Result;
use clap::{Parser, Subcommand};
use rollout_agents::cli::commands::{evaluate, play};

#[derive(Parser)]
#[command(name = "rollout-agents")]
#[command(version, about = "Flat Monte Carlo rollout agents for two-player games", long_about = None)]
struct Cli {
    /// Show debug logs (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two agents
    Play(play::PlayArgs),

    /// Score the legal moves of a position
    Evaluate(evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Evaluate(args) => evaluate::execute(args),
    }
}
