//! Simulator port - batched random playouts from a fixed state

use crate::{
    Result,
    ports::GameState,
    types::{OutcomeVector, RolloutBudget},
};

/// Plays a state to completion `budget` times and aggregates the outcomes.
///
/// Implementations must return the per-player **sum** over all playouts;
/// dividing by the budget is the caller's job.
pub trait RolloutSimulator<S: GameState> {
    /// # Errors
    ///
    /// Propagates game interface failures raised while stepping, and may
    /// return [`crate::Error::StepLimitExceeded`] for runaway playouts.
    fn run(&mut self, state: &S, budget: RolloutBudget) -> Result<OutcomeVector>;

    /// Reseed the simulator's random source.
    ///
    /// Stateless or externally seeded simulators can ignore this.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

impl<S: GameState, R: RolloutSimulator<S> + ?Sized> RolloutSimulator<S> for Box<R> {
    fn run(&mut self, state: &S, budget: RolloutBudget) -> Result<OutcomeVector> {
        (**self).run(state, budget)
    }

    fn set_rng_seed(&mut self, seed: u64) {
        (**self).set_rng_seed(seed)
    }
}
