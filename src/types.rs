//! Core value types shared by agents, simulators and games.

use std::{
    fmt,
    num::NonZeroUsize,
    ops::{AddAssign, Index},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, utils};

/// Opaque action identifier drawn from a state-dependent legal set.
pub type Action = usize;

/// Index of a participant (0 or 1).
pub type PlayerIndex = usize;

/// Number of players supported by the zero-sum scoring convention.
pub const NUM_PLAYERS: usize = 2;

/// Reject player indices outside `0..NUM_PLAYERS`.
pub fn validate_player(player: PlayerIndex) -> Result<()> {
    if player < NUM_PLAYERS {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "player index {player} is out of range (expected 0..{NUM_PLAYERS})"
        )))
    }
}

/// Aggregated rollout results, one scalar per player slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeVector([f64; NUM_PLAYERS]);

impl OutcomeVector {
    pub fn new(values: [f64; NUM_PLAYERS]) -> Self {
        OutcomeVector(values)
    }

    pub fn zero() -> Self {
        OutcomeVector([0.0; NUM_PLAYERS])
    }

    /// Record a raw step score given from player 0's perspective.
    ///
    /// Player 0 receives `score`, player 1 receives `-score`.
    pub fn record_zero_sum(&mut self, score: f64) {
        for (player, slot) in self.0.iter_mut().enumerate() {
            *slot += utils::perspective_sign(player) * score;
        }
    }

    pub fn values(&self) -> [f64; NUM_PLAYERS] {
        self.0
    }
}

impl Index<PlayerIndex> for OutcomeVector {
    type Output = f64;

    fn index(&self, player: PlayerIndex) -> &f64 {
        &self.0[player]
    }
}

impl AddAssign for OutcomeVector {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl std::iter::Sum for OutcomeVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(OutcomeVector::zero(), |mut acc, outcome| {
            acc += outcome;
            acc
        })
    }
}

/// Number of simulated playouts per candidate action (always positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RolloutBudget(NonZeroUsize);

impl RolloutBudget {
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `rollouts` is zero.
    pub fn new(rollouts: usize) -> Result<Self> {
        NonZeroUsize::new(rollouts)
            .map(RolloutBudget)
            .ok_or_else(|| Error::invalid_argument("rollout budget must be positive, got 0"))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn as_f64(&self) -> f64 {
        self.0.get() as f64
    }
}

impl TryFrom<i64> for RolloutBudget {
    type Error = Error;

    fn try_from(rollouts: i64) -> Result<Self> {
        let rollouts = usize::try_from(rollouts).map_err(|_| {
            Error::invalid_argument(format!("rollout budget must be positive, got {rollouts}"))
        })?;
        RolloutBudget::new(rollouts)
    }
}

impl fmt::Display for RolloutBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score of a single candidate action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionScore {
    pub action: Action,
    pub score: f64,
    /// Whether the action ended the game (score is exact, not sampled)
    pub terminal: bool,
}

/// Score table parallel to the legal-action list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionScores {
    entries: Vec<ActionScore>,
}

impl ActionScores {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entry: ActionScore) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ActionScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the highest score; the first one wins ties.
    pub fn best(&self) -> Option<&ActionScore> {
        let scores: Vec<f64> = self.entries.iter().map(|entry| entry.score).collect();
        utils::argmax(&scores).map(|index| &self.entries[index])
    }
}
