//! Match play between two agents
//!
//! The arena drives the uniform [`Agent`](crate::ports::Agent) surface: it
//! hands each player its information state, applies the chosen action, and
//! reports every step's reward back to both agents through `observe`.

pub mod matches;
pub mod observers;

pub use matches::{Arena, ArenaConfig, GameRecord, MatchResult};
pub use observers::{MetricsObserver, ProgressObserver};
