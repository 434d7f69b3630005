//! Game port - the narrow interface the evaluator and simulators need from a game
//!
//! Concrete games (e.g. [`crate::tictactoe`]) are adapters implementing these
//! traits. States have value semantics: stepping never mutates in place.

use crate::{
    Result,
    types::{Action, PlayerIndex},
};

/// Outcome of applying one action to a [`GameState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    /// Fresh successor state
    pub state: S,
    /// Immediate score from player 0's perspective (zero-sum)
    pub score: f64,
    /// Whether the game ended with this step
    pub terminal: bool,
}

/// A fully-determined game position.
///
/// # Examples
///
/// ```no_run
/// use rollout_agents::{
///     ports::{GameState, Step},
///     tictactoe::TicTacToe,
/// };
///
/// let state = TicTacToe::new();
/// let Step { state, score, terminal } = state.step(0, 4)?;
/// assert_eq!(score, 0.0);
/// assert!(!terminal);
/// assert_eq!(state.current_player(), 1);
/// # Ok::<(), rollout_agents::Error>(())
/// ```
pub trait GameState: Clone + Send + Sync {
    /// Apply `action` for `player` and return the successor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalAction`] if `action` is not legal for
    /// `player` in this state.
    fn step(&self, player: PlayerIndex, action: Action) -> Result<Step<Self>>;

    /// Player expected to act next.
    fn current_player(&self) -> PlayerIndex;

    /// Legal actions for `player`; empty once the game is over.
    fn legal_actions(&self, player: PlayerIndex) -> Vec<Action>;

    fn is_terminal(&self) -> bool;
}

/// What one actor can observe; able to materialize a consistent [`GameState`].
pub trait InformationState {
    type State: GameState;

    /// Reconstruct a concrete state consistent with this observation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Reconstruction`] if the observation is
    /// internally inconsistent.
    fn create_game_state(&self) -> Result<Self::State>;
}

/// Game states that can project themselves onto a player's information state.
///
/// Used by the arena to hand each agent only what it may observe.
pub trait Perceive: GameState {
    type Info: InformationState<State = Self>;

    fn information_state(&self, player: PlayerIndex) -> Self::Info;
}
