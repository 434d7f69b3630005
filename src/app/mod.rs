//! Application layer with dependency injection container.
//!
//! Agents are assembled here: the configuration picks a strategy, and the
//! container injects the matching rollout simulator into the evaluator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │   App (DI container) + AgentConfig   │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ injects                    │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Simulators (simulation)             │   │
//! │  │  - RandomRolloutRunner               │   │
//! │  │  - ParallelRolloutRunner             │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                 │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Ports (ports)                       │   │
//! │  │  - RolloutSimulator / Agent traits   │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                    │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Agents (agents)                     │   │
//! │  │  - RandomAgent                       │   │
//! │  │  - RandomRolloutAgent                │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod container;

pub use config::{AgentConfig, AgentKind};
pub use container::{App, AppBuilder};
