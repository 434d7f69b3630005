//! Uniform random policy
//!
//! Used standalone as a baseline agent and as the driver of every actor
//! inside rollout playouts.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::{Agent, InformationState},
    types::{Action, PlayerIndex},
};

/// Picks a uniformly random element of the legal action set.
///
/// Keeps no memory between calls; the generator is its only state.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent seeded from the thread-local generator
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw an index uniformly from `[0, len)` and return that action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `legal_actions` is empty.
    pub fn select(&mut self, legal_actions: &[Action]) -> Result<Action> {
        if legal_actions.is_empty() {
            return Err(Error::invalid_argument(
                "random policy called with an empty action set",
            ));
        }
        let index = self.rng.random_range(0..legal_actions.len());
        Ok(legal_actions[index])
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<I: InformationState> Agent<I> for RandomAgent {
    fn observe(&mut self, _reward: f64, _terminal: bool) {}

    fn act(
        &mut self,
        _player: PlayerIndex,
        _information_state: &I,
        legal_actions: &[Action],
    ) -> Result<Action> {
        self.select(legal_actions)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.reseed(seed);
    }
}
