//! Ports (trait boundaries) for external collaborators.
//!
//! The evaluator only depends on these traits. Games, simulators and agents
//! are adapters implementing them.

pub mod agent;
pub mod game;
pub mod observer;
pub mod simulator;

pub use agent::Agent;
pub use game::{GameState, InformationState, Perceive, Step};
pub use observer::MatchObserver;
pub use simulator::RolloutSimulator;
