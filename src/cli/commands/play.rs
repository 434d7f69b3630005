//! Play command - Pit two agents against each other at tic-tac-toe

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{AgentKind, App},
    arena::{Arena, MetricsObserver, ProgressObserver},
    cli::{
        config::PlayConfig,
        output::{format_number, format_percent, print_kv, print_section},
    },
    tictactoe::{BoardView, TicTacToe},
};

#[derive(Parser, Debug)]
#[command(about = "Play a tic-tac-toe match between two agents")]
pub struct PlayArgs {
    /// Strategy of player 0 (X, moves first): random or rollout
    #[arg(long)]
    pub player0: Option<AgentKind>,

    /// Strategy of player 1 (O): random or rollout
    #[arg(long)]
    pub player1: Option<AgentKind>,

    /// Number of games to play
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Playouts per candidate action for rollout agents
    #[arg(long, short = 'r', allow_hyphen_values = true)]
    pub rollouts: Option<i64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run playouts on all cores
    #[arg(long)]
    pub parallel: bool,

    /// JSON match configuration; flags given on the command line take precedence
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Save the match result as JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl PlayArgs {
    /// Merge the command-line flags into a configuration loaded from file.
    pub fn apply(&self, config: &mut PlayConfig) {
        for (player, kind) in [self.player0, self.player1].into_iter().enumerate() {
            if let Some(kind) = kind {
                config.players[player].kind = kind;
            }
        }
        for player in &mut config.players {
            if let Some(rollouts) = self.rollouts {
                player.rollouts = rollouts;
            }
            if self.parallel {
                player.parallel = true;
            }
        }
        if let Some(games) = self.games {
            config.arena.games = games;
        }
        if self.seed.is_some() {
            config.arena.seed = self.seed;
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)
            .with_context(|| format!("Failed to load match configuration {}", path.display()))?,
        None => PlayConfig::default(),
    };
    args.apply(&mut config);

    let app = App::new();
    let mut first = app
        .create_agent::<BoardView>(&config.players[0])
        .context("Invalid configuration for player 0")?;
    let mut second = app
        .create_agent::<BoardView>(&config.players[1])
        .context("Invalid configuration for player 1")?;

    print_section("Match Configuration");
    print_kv("Player 0 (X)", first.name());
    print_kv("Player 1 (O)", second.name());
    print_kv("Games", &format_number(config.arena.games));
    if let Some(seed) = config.arena.seed {
        print_kv("Seed", &seed.to_string());
    }
    println!();

    let metrics = MetricsObserver::new();
    let mut arena = Arena::new(config.arena.clone()).with_observer(Box::new(metrics.clone()));
    if !args.no_progress {
        arena = arena.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = arena
        .run(&TicTacToe::new(), [first.as_mut(), second.as_mut()])
        .context("Match aborted")?;
    let summary = metrics.summary();

    print_section("Match Results");
    for (player, name) in result.players.iter().enumerate() {
        print_kv(
            &format!("{name} wins"),
            &format!(
                "{} ({})",
                format_number(result.wins[player]),
                format_percent(result.win_rate(player))
            ),
        );
    }
    print_kv(
        "Draws",
        &format!(
            "{} ({})",
            format_number(result.draws),
            format_percent(result.draw_rate())
        ),
    );
    print_kv(
        "Avg game length",
        &format!("{:.2} moves", summary.avg_game_length()),
    );

    if let Some(path) = &args.output {
        result
            .save(path)
            .with_context(|| format!("Failed to save match result to {}", path.display()))?;
        println!("\nResult saved to: {}", path.display());
    }

    Ok(())
}
