//! Configuration types for agent creation.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, simulation::DEFAULT_MAX_STEPS, types::RolloutBudget};

/// Which decision strategy an agent uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AgentKind {
    /// Uniformly random legal action
    Random,
    /// Flat random-rollout evaluation of every legal action
    #[default]
    Rollout,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgentKind::Random => "random",
            AgentKind::Rollout => "rollout",
        };
        f.write_str(label)
    }
}

impl FromStr for AgentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "random" | "uniform" => Ok(AgentKind::Random),
            "rollout" | "random-rollout" | "random_rollout" => Ok(AgentKind::Rollout),
            _ => Err(Error::ParseAgentKind {
                input: s.to_string(),
                expected: "random, rollout".to_string(),
            }),
        }
    }
}

/// Configuration for creating an agent.
///
/// # Examples
///
/// ```
/// use rollout_agents::app::{AgentConfig, AgentKind};
///
/// let config = AgentConfig::new(AgentKind::Rollout)
///     .with_rollouts(64)
///     .with_seed(42)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Decision strategy
    pub kind: AgentKind,
    /// Display name (defaults to the strategy name)
    pub name: Option<String>,
    /// Playouts per candidate action; must be positive
    pub rollouts: i64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Run the playouts of each candidate on the rayon pool
    pub parallel: bool,
    /// Safety bound on the length of one playout
    pub max_rollout_steps: usize,
}

impl AgentConfig {
    /// Create a new agent configuration for the given strategy.
    ///
    /// Uses default values for other parameters:
    /// - Rollouts: 32
    /// - Seed: None (non-deterministic)
    /// - Sequential playouts, at most 10 000 steps each
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            name: None,
            rollouts: 32,
            seed: None,
            parallel: false,
            max_rollout_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the number of playouts per candidate action.
    pub fn with_rollouts(mut self, rollouts: i64) -> Self {
        self.rollouts = rollouts;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_rollout_steps(mut self, max_steps: usize) -> Self {
        self.max_rollout_steps = max_steps;
        self
    }

    /// Name the created agent reports
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => match self.kind {
                AgentKind::Random => "Random".to_string(),
                AgentKind::Rollout => format!("Rollout({})", self.rollouts),
            },
        }
    }

    /// Check the configuration and return the validated rollout budget.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `rollouts <= 0`
    /// - [`Error::InvalidConfiguration`] if `max_rollout_steps == 0`
    pub fn validate(&self) -> Result<RolloutBudget> {
        let budget = RolloutBudget::try_from(self.rollouts)?;
        if self.max_rollout_steps == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_rollout_steps must be positive".to_string(),
            });
        }
        Ok(budget)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load configuration from a JSON file
    ///
    /// Missing fields take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(AgentKind::default())
    }
}
