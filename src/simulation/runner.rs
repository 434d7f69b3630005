//! Sequential random rollout runner

use log::debug;

use super::{DEFAULT_MAX_STEPS, play_out};
use crate::{
    Result,
    agents::RandomAgent,
    ports::{GameState, RolloutSimulator},
    types::{OutcomeVector, RolloutBudget},
};

/// Runs playouts one after another using a single shared generator.
///
/// Given the same seed and the same sequence of calls, the returned outcome
/// vectors are identical.
#[derive(Debug, Clone)]
pub struct RandomRolloutRunner {
    policy: RandomAgent,
    max_steps: usize,
}

impl RandomRolloutRunner {
    /// Create a runner seeded from the thread-local generator
    pub fn new() -> Self {
        Self {
            policy: RandomAgent::new("Rollout"),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Create a runner with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            policy: RandomAgent::with_seed("Rollout", seed),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Set the per-playout step bound.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for RandomRolloutRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> RolloutSimulator<S> for RandomRolloutRunner {
    fn run(&mut self, state: &S, budget: RolloutBudget) -> Result<OutcomeVector> {
        let mut total = OutcomeVector::zero();
        for _ in 0..budget.get() {
            total += play_out(state, &mut self.policy, self.max_steps)?;
        }
        debug!("{budget} sequential rollouts: outcome {:?}", total.values());
        Ok(total)
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.policy.reseed(seed);
    }
}
