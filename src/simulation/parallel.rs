//! Parallel random rollout runner (rayon)

use log::debug;
use rand::random;
use rayon::prelude::*;

use super::{DEFAULT_MAX_STEPS, play_out};
use crate::{
    Result,
    agents::RandomAgent,
    ports::{GameState, RolloutSimulator},
    types::{OutcomeVector, RolloutBudget},
};

/// Runs the playouts of one call concurrently on the rayon thread pool.
///
/// Every playout owns a generator seeded from the runner seed, the call
/// counter and the playout index. Outcomes are reduced by summation, so a
/// seeded runner produces the same outcome vectors regardless of how many
/// threads execute it.
#[derive(Debug, Clone)]
pub struct ParallelRolloutRunner {
    seed: u64,
    calls: u64,
    max_steps: usize,
}

impl ParallelRolloutRunner {
    /// Create a runner with a random base seed
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a runner with a deterministic base seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            calls: 0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Set the per-playout step bound.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for ParallelRolloutRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// SplitMix64 finalizer over the combined inputs.
fn playout_seed(seed: u64, call: u64, index: u64) -> u64 {
    let mut z = seed
        ^ call.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ index.wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl<S: GameState> RolloutSimulator<S> for ParallelRolloutRunner {
    fn run(&mut self, state: &S, budget: RolloutBudget) -> Result<OutcomeVector> {
        let call = self.calls;
        self.calls = self.calls.wrapping_add(1);
        let seed = self.seed;
        let max_steps = self.max_steps;

        let total = (0..budget.get() as u64)
            .into_par_iter()
            .map(|index| {
                let mut policy = RandomAgent::with_seed("Rollout", playout_seed(seed, call, index));
                play_out(state, &mut policy, max_steps)
            })
            .try_reduce(OutcomeVector::zero, |mut acc, outcome| {
                acc += outcome;
                Ok(acc)
            })?;

        debug!("{budget} parallel rollouts (call {call}): outcome {:?}", total.values());
        Ok(total)
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.calls = 0;
    }
}
