//! Agent port - the uniform surface tournament and training code is written against
//!
//! Every decision-making strategy (uniform random play, rollout evaluation)
//! implements [`Agent`], so callers pick a strategy at construction time and
//! drive it through the same two calls.

use crate::{
    Result,
    ports::InformationState,
    types::{Action, PlayerIndex},
};

/// Agent trait - Unified interface for all action-selection strategies
///
/// # Examples
///
/// ```no_run
/// use rollout_agents::{
///     agents::RandomAgent,
///     ports::Agent,
///     tictactoe::{BoardView, TicTacToe},
/// };
///
/// fn first_move<A: Agent<BoardView>>(agent: &mut A) -> rollout_agents::Result<usize> {
///     let view = BoardView::new(TicTacToe::new());
///     agent.act(0, &view, &[0, 1, 2, 3, 4, 5, 6, 7, 8])
/// }
///
/// let mut agent = RandomAgent::with_seed("Random", 7);
/// let action = first_move(&mut agent)?;
/// assert!(action < 9);
/// # Ok::<(), rollout_agents::Error>(())
/// ```
pub trait Agent<I: InformationState>: Send {
    /// Receive the reward for the last step and whether it ended the game.
    ///
    /// Agents that do not learn treat this as a no-op.
    fn observe(&mut self, reward: f64, terminal: bool);

    /// Choose one of `legal_actions` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] when `legal_actions` is empty;
    /// implementations must never fall back to a default action.
    fn act(
        &mut self,
        player: PlayerIndex,
        information_state: &I,
        legal_actions: &[Action],
    ) -> Result<Action>;

    /// Get the agent's name.
    ///
    /// Used for identification in match summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Match runners call this method when supplied with a deterministic
    /// seed to ensure reproducible results.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

impl<I: InformationState, A: Agent<I> + ?Sized> Agent<I> for Box<A> {
    fn observe(&mut self, reward: f64, terminal: bool) {
        (**self).observe(reward, terminal)
    }

    fn act(
        &mut self,
        player: PlayerIndex,
        information_state: &I,
        legal_actions: &[Action],
    ) -> Result<Action> {
        (**self).act(player, information_state, legal_actions)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_rng_seed(&mut self, seed: u64) {
        (**self).set_rng_seed(seed)
    }
}
