//! Evaluate command - Score every legal move of a tic-tac-toe position

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    agents::evaluate_actions,
    cli::output::{print_kv, print_score_table, print_section},
    ports::RolloutSimulator,
    simulation::{ParallelRolloutRunner, RandomRolloutRunner},
    tictactoe::{BoardView, TicTacToe},
    types::{ActionScores, RolloutBudget},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the legal moves of a position by random rollouts")]
pub struct EvaluateArgs {
    /// Board as nine cells read row by row (`X`, `O`, `.`), e.g. "X.O......"
    #[arg(long, short = 'b')]
    pub board: String,

    /// Playouts per candidate move
    #[arg(long, short = 'r', default_value_t = 256, allow_hyphen_values = true)]
    pub rollouts: i64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run playouts on all cores
    #[arg(long)]
    pub parallel: bool,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let view = BoardView::from_string(&args.board)
        .with_context(|| format!("Invalid board '{}'", args.board))?;
    let budget = RolloutBudget::try_from(args.rollouts)?;

    print_section("Position");
    println!("{}", view.board());
    println!();

    let scores = score_position(&view, budget, args.seed, args.parallel)?;
    let chosen = scores.best().map(|entry| entry.action);
    let player = view.board().to_move();

    print_section("Rollout Evaluation");
    print_kv("To move", &format!("{player:?} (player {})", player.index()));
    print_kv("Rollouts", &budget.to_string());
    println!();
    print_score_table(&scores, chosen);

    if let Some(action) = chosen {
        println!();
        print_kv("Chosen action", &format!("{action} (row {}, col {})", action / 3, action % 3));
    }
    Ok(())
}

/// Score all legal moves of the player to move in `view`.
pub fn score_position(
    view: &BoardView,
    budget: RolloutBudget,
    seed: Option<u64>,
    parallel: bool,
) -> Result<ActionScores> {
    let board = view.board();
    if board.is_over() {
        bail!("The game on board '{}' is already over", board.encode());
    }

    let mut runner: Box<dyn RolloutSimulator<TicTacToe>> = if parallel {
        Box::new(seed.map_or_else(ParallelRolloutRunner::new, ParallelRolloutRunner::with_seed))
    } else {
        Box::new(seed.map_or_else(RandomRolloutRunner::new, RandomRolloutRunner::with_seed))
    };

    let scores = evaluate_actions(
        board.to_move().index(),
        view,
        &board.legal_moves(),
        budget,
        runner.as_mut(),
    )?;
    Ok(scores)
}
