//! Rollout simulators driven by the uniform random policy
//!
//! Both runners play every actor with [`RandomAgent`] until the game ends and
//! sum the zero-sum step scores per player. They differ only in scheduling:
//!
//! - [`RandomRolloutRunner`]: one shared generator, playouts run sequentially
//! - [`ParallelRolloutRunner`]: playouts spread over the rayon pool, each with
//!   its own generator derived from `(seed, call, playout index)`, so the
//!   result does not depend on thread scheduling

pub mod parallel;
pub mod runner;

pub use parallel::ParallelRolloutRunner;
pub use runner::RandomRolloutRunner;

use crate::{
    Error, Result,
    agents::RandomAgent,
    ports::GameState,
    types::OutcomeVector,
};

/// Default bound on the number of steps in a single playout
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Play `state` to completion with `policy` choosing for every actor.
///
/// # Errors
///
/// - [`Error::StepLimitExceeded`] if the game has not ended after `max_steps`
/// - [`Error::GameInterface`] if a non-terminal state offers no legal action
/// - any error raised by [`GameState::step`]
pub fn play_out<S: GameState>(
    state: &S,
    policy: &mut RandomAgent,
    max_steps: usize,
) -> Result<OutcomeVector> {
    let mut outcome = OutcomeVector::zero();
    let mut current = state.clone();
    let mut terminal = current.is_terminal();
    let mut steps = 0;

    while !terminal {
        if steps >= max_steps {
            return Err(Error::StepLimitExceeded { limit: max_steps });
        }

        let player = current.current_player();
        let actions = current.legal_actions(player);
        if actions.is_empty() {
            return Err(Error::game_interface(format!(
                "non-terminal state offers no legal action to player {player}"
            )));
        }

        let action = policy.select(&actions)?;
        let step = current.step(player, action)?;
        outcome.record_zero_sum(step.score);
        current = step.state;
        terminal = step.terminal;
        steps += 1;
    }

    Ok(outcome)
}
