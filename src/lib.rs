//! Flat Monte Carlo rollout agents for two-player zero-sum games
//!
//! This crate provides:
//! - Game ports ([`ports`]) that any turn-based two-player game can implement
//! - A uniform [`RandomAgent`] baseline, which also drives the playouts
//! - A rollout action evaluator ([`agents::rollout`]) scoring every legal
//!   action by simulated random play, wrapped as [`RandomRolloutAgent`]
//! - Sequential and rayon-parallel rollout simulators
//! - Tic-tac-toe as a reference game, a match [`arena`] and a CLI
//!
//! # Example
//!
//! ```
//! use rollout_agents::{RandomAgent, RandomRolloutAgent, ports::Agent};
//! use rollout_agents::simulation::RandomRolloutRunner;
//! use rollout_agents::tictactoe::BoardView;
//!
//! let view = BoardView::from_string("XX.OO....")?;
//! let legal = view.board().legal_moves();
//!
//! let mut agent = RandomRolloutAgent::new("Rollout", RandomRolloutRunner::with_seed(7), 32)?;
//! let action = agent.act(0, &view, &legal)?;
//! assert!(legal.contains(&action));
//!
//! let mut baseline = RandomAgent::with_seed("Random", 7);
//! let action = Agent::<BoardView>::act(&mut baseline, 0, &view, &legal)?;
//! assert!(legal.contains(&action));
//! # Ok::<(), rollout_agents::Error>(())
//! ```

pub mod agents;
pub mod app;
pub mod arena;
pub mod cli;
pub mod error;
pub mod ports;
pub mod simulation;
pub mod tictactoe;
pub mod types;
pub mod utils;

pub use agents::{RandomAgent, RandomRolloutAgent, evaluate_actions, select_action};
pub use error::{Error, Result};
pub use types::{Action, ActionScore, ActionScores, OutcomeVector, PlayerIndex, RolloutBudget};
