//! Error types for the rollout-agents crate

use thiserror::Error;

use crate::types::{Action, PlayerIndex};

/// Main error type for the rollout-agents crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("illegal action {action} for player {player}: {reason}")]
    IllegalAction {
        player: PlayerIndex,
        action: Action,
        reason: String,
    },

    #[error("cannot reconstruct game state: {message}")]
    Reconstruction { message: String },

    #[error("game interface error: {message}")]
    GameInterface { message: String },

    #[error("rollout did not reach a terminal state within {limit} steps")]
    StepLimitExceeded { limit: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid agent kind '{input}'. Expected one of: {expected}")]
    ParseAgentKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn game_interface(message: impl Into<String>) -> Self {
        Error::GameInterface {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
