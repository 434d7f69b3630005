//! Dependency injection container for agent creation.
//!
//! The container decides which rollout simulator each evaluator receives and
//! applies default seeding, so callers only choose a strategy.

use log::debug;

use super::config::{AgentConfig, AgentKind};
use crate::{
    Result,
    agents::{RandomAgent, RandomRolloutAgent},
    ports::{Agent, InformationState},
    simulation::{ParallelRolloutRunner, RandomRolloutRunner},
};

/// Application with dependency injection.
///
/// # Examples
///
/// ```
/// use rollout_agents::app::{App, AgentConfig, AgentKind};
/// use rollout_agents::tictactoe::BoardView;
///
/// let app = App::new();
/// let config = AgentConfig::new(AgentKind::Rollout).with_rollouts(8).with_seed(42);
/// let agent = app.create_agent::<BoardView>(&config)?;
/// assert_eq!(agent.name(), "Rollout(8)");
/// # Ok::<(), rollout_agents::Error>(())
/// ```
pub struct App {
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults (no default seed).
    pub fn new() -> Self {
        Self { default_seed: None }
    }

    /// Create a builder for constructing app with custom settings.
    ///
    /// Primarily used for testing with deterministic seeds.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Create an agent playing games whose information states are `I`.
    ///
    /// The seed from `config` takes precedence over the app default.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`AgentConfig::validate`].
    pub fn create_agent<I>(&self, config: &AgentConfig) -> Result<Box<dyn Agent<I>>>
    where
        I: InformationState + 'static,
    {
        let budget = config.validate()?;
        let seed = config.seed.or(self.default_seed);
        let name = config.display_name();

        debug!(
            "creating {} agent '{name}' (rollouts={budget}, seed={seed:?}, parallel={})",
            config.kind, config.parallel
        );

        let agent: Box<dyn Agent<I>> = match config.kind {
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(name, seed),
                None => RandomAgent::new(name),
            }),
            AgentKind::Rollout if config.parallel => {
                let runner = seed
                    .map_or_else(ParallelRolloutRunner::new, ParallelRolloutRunner::with_seed)
                    .with_max_steps(config.max_rollout_steps);
                Box::new(RandomRolloutAgent::with_budget(name, runner, budget))
            }
            AgentKind::Rollout => {
                let runner = seed
                    .map_or_else(RandomRolloutRunner::new, RandomRolloutRunner::with_seed)
                    .with_max_steps(config.max_rollout_steps);
                Box::new(RandomRolloutAgent::with_budget(name, runner, budget))
            }
        };
        Ok(agent)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom settings.
///
/// # Examples
///
/// ```
/// use rollout_agents::app::AppBuilder;
///
/// let app = AppBuilder::new()
///     .with_default_seed(42)  // All agents without their own seed use 42
///     .build();
/// ```
pub struct AppBuilder {
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self { default_seed: None }
    }

    /// Set a default random seed for all agents created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured settings.
    pub fn build(self) -> App {
        App {
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
