//! Match configuration files for the `play` command

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    app::{AgentConfig, AgentKind},
    arena::ArenaConfig,
    types::NUM_PLAYERS,
};

/// Configuration of a whole match: one agent per player plus arena settings.
///
/// Every field is optional in the JSON file:
///
/// ```json
/// {
///   "players": [
///     { "kind": "rollout", "rollouts": 64, "parallel": true },
///     { "kind": "random" }
///   ],
///   "arena": { "games": 500, "seed": 42 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Agent controlling each player slot
    pub players: [AgentConfig; NUM_PLAYERS],

    /// Arena settings
    pub arena: ArenaConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            players: [
                AgentConfig::new(AgentKind::Rollout),
                AgentConfig::new(AgentKind::Random),
            ],
            arena: ArenaConfig::default(),
        }
    }
}

impl PlayConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
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
}
