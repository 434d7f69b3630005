//! Agent implementations
//!
//! - [`RandomAgent`]: uniform random baseline, also the rollout driver
//! - [`RandomRolloutAgent`]: flat random-rollout action evaluator

pub mod random;
pub mod rollout;

pub use random::RandomAgent;
pub use rollout::{RandomRolloutAgent, evaluate_actions, select_action};
