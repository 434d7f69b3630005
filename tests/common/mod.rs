//! Common test fixtures for the rollout-agents test suite.
//!
//! Provides a scripted one-ply game whose transitions are fixed in advance,
//! and a rollout simulator that returns fixed outcome vectors while recording
//! every invocation.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use rollout_agents::{
    Error, Result,
    ports::{GameState, InformationState, RolloutSimulator, Step},
    types::{Action, OutcomeVector, PlayerIndex, RolloutBudget},
};

/// Immediate result of playing one scripted action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub score: f64,
    pub terminal: bool,
}

/// Root or leaf of a scripted game.
///
/// The root offers the scripted actions to `to_move`; every leaf is labelled
/// by the action that reached it and accepts no further actions.
#[derive(Debug, Clone)]
pub struct ScriptedState {
    transitions: Arc<Vec<(Action, Transition)>>,
    to_move: PlayerIndex,
    reached_by: Option<Action>,
}

impl ScriptedState {
    pub fn reached_by(&self) -> Option<Action> {
        self.reached_by
    }
}

impl GameState for ScriptedState {
    fn step(&self, player: PlayerIndex, action: Action) -> Result<Step<Self>> {
        let illegal = |reason: &str| Error::IllegalAction {
            player,
            action,
            reason: reason.to_string(),
        };

        if self.reached_by.is_some() {
            return Err(illegal("scripted game is over"));
        }
        if player != self.to_move {
            return Err(illegal("not this player's turn"));
        }
        let transition = self
            .transitions
            .iter()
            .find(|(scripted, _)| *scripted == action)
            .map(|(_, transition)| *transition)
            .ok_or_else(|| illegal("action is not scripted"))?;

        Ok(Step {
            state: ScriptedState {
                transitions: Arc::clone(&self.transitions),
                to_move: 1 - player,
                reached_by: Some(action),
            },
            score: transition.score,
            terminal: transition.terminal,
        })
    }

    fn current_player(&self) -> PlayerIndex {
        self.to_move
    }

    fn legal_actions(&self, player: PlayerIndex) -> Vec<Action> {
        if self.reached_by.is_some() || player != self.to_move {
            return Vec::new();
        }
        self.transitions.iter().map(|(action, _)| *action).collect()
    }

    fn is_terminal(&self) -> bool {
        self.reached_by.is_some()
    }
}

/// Information state of the scripted game; counts reconstructions.
#[derive(Debug, Clone)]
pub struct ScriptedInfo {
    root: ScriptedState,
    inconsistent: bool,
    reconstructions: Arc<AtomicUsize>,
}

impl ScriptedInfo {
    /// Root where `to_move` chooses between `(action, raw score, terminal)` entries.
    pub fn new(to_move: PlayerIndex, script: &[(Action, f64, bool)]) -> Self {
        let transitions = script
            .iter()
            .map(|&(action, score, terminal)| (action, Transition { score, terminal }))
            .collect();
        Self {
            root: ScriptedState {
                transitions: Arc::new(transitions),
                to_move,
                reached_by: None,
            },
            inconsistent: false,
            reconstructions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Information state whose reconstruction always fails.
    pub fn inconsistent(to_move: PlayerIndex, script: &[(Action, f64, bool)]) -> Self {
        Self {
            inconsistent: true,
            ..Self::new(to_move, script)
        }
    }

    pub fn reconstructions(&self) -> usize {
        self.reconstructions.load(Ordering::SeqCst)
    }
}

impl InformationState for ScriptedInfo {
    type State = ScriptedState;

    fn create_game_state(&self) -> Result<ScriptedState> {
        self.reconstructions.fetch_add(1, Ordering::SeqCst);
        if self.inconsistent {
            return Err(Error::Reconstruction {
                message: "scripted observation is inconsistent".to_string(),
            });
        }
        Ok(self.root.clone())
    }
}

/// One recorded simulator invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorCall {
    pub leaf: Option<Action>,
    pub budget: usize,
}

/// Rollout simulator returning a fixed outcome vector per leaf.
///
/// Leaves without a configured outcome yield zeros.
#[derive(Debug, Default)]
pub struct FixedOutcomeSimulator {
    outcomes: HashMap<Action, OutcomeVector>,
    failure: Option<String>,
    calls: Vec<SimulatorCall>,
}

impl FixedOutcomeSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, leaf: Action, outcome: [f64; 2]) -> Self {
        self.outcomes.insert(leaf, OutcomeVector::new(outcome));
        self
    }

    /// Simulator failing every run with [`Error::GameInterface`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[SimulatorCall] {
        &self.calls
    }

    pub fn visited(&self) -> Vec<Option<Action>> {
        self.calls.iter().map(|call| call.leaf).collect()
    }
}

impl RolloutSimulator<ScriptedState> for FixedOutcomeSimulator {
    fn run(&mut self, state: &ScriptedState, budget: RolloutBudget) -> Result<OutcomeVector> {
        let leaf = state.reached_by();
        self.calls.push(SimulatorCall {
            leaf,
            budget: budget.get(),
        });
        if let Some(message) = &self.failure {
            return Err(Error::GameInterface {
                message: message.clone(),
            });
        }
        Ok(leaf
            .and_then(|action| self.outcomes.get(&action).copied())
            .unwrap_or_else(OutcomeVector::zero))
    }
}

/// Shorthand for a validated budget in tests.
pub fn budget(rollouts: usize) -> RolloutBudget {
    RolloutBudget::new(rollouts).unwrap()
}
