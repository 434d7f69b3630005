//! Flat random-rollout action evaluation
//!
//! Each candidate action is expanded one ply from a fresh reconstruction of
//! the acting player's information state. Terminal branches are scored
//! exactly by their immediate score; the others add the rollout margin
//! `outcome[me] - outcome[opponent]` and are averaged over the budget.
//! The arg-max (first maximum on ties) is selected.
//!
//! Scores assume a two-player zero-sum game: raw scores are given from
//! player 0's perspective and are negated for player 1.

use log::debug;

use crate::{
    Error, Result,
    ports::{Agent, GameState, InformationState, RolloutSimulator, Step},
    types::{Action, ActionScore, ActionScores, PlayerIndex, RolloutBudget, validate_player},
    utils::{opponent_of, perspective_sign},
};

/// Score every legal action for `player`.
///
/// One game-state branch is reconstructed per action; branches share no
/// mutable state. Collaborator errors abort the evaluation and are returned
/// unchanged.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `legal_actions` is empty or `player` is
///   not `0` or `1`
/// - [`Error::Reconstruction`], [`Error::IllegalAction`] or any other error
///   raised by the game or the simulator
pub fn evaluate_actions<I, R>(
    player: PlayerIndex,
    information_state: &I,
    legal_actions: &[Action],
    budget: RolloutBudget,
    runner: &mut R,
) -> Result<ActionScores>
where
    I: InformationState,
    R: RolloutSimulator<I::State> + ?Sized,
{
    validate_inputs(player, legal_actions)?;

    let sign = perspective_sign(player);
    let opponent = opponent_of(player);
    let mut scores = ActionScores::with_capacity(legal_actions.len());

    for (index, &action) in legal_actions.iter().enumerate() {
        let state = information_state.create_game_state()?;
        let Step {
            state: next,
            score,
            terminal,
        } = state.step(player, action)?;

        let mut player_score = sign * score;
        if !terminal {
            let outcome = runner.run(&next, budget)?;
            player_score += outcome[player] - outcome[opponent];
            player_score /= budget.as_f64();
        }

        debug!(
            "player {player} action #{index} ({action}): score={player_score:.4} terminal={terminal}"
        );
        scores.push(ActionScore {
            action,
            score: player_score,
            terminal,
        });
    }

    Ok(scores)
}

/// Pick the best-scoring legal action for `player`.
///
/// With a single legal action the inputs are still validated, but no state
/// is reconstructed and no rollout is run.
///
/// # Errors
///
/// Same as [`evaluate_actions`], plus [`Error::GameInterface`] when any
/// candidate scored NaN.
pub fn select_action<I, R>(
    player: PlayerIndex,
    information_state: &I,
    legal_actions: &[Action],
    budget: RolloutBudget,
    runner: &mut R,
) -> Result<Action>
where
    I: InformationState,
    R: RolloutSimulator<I::State> + ?Sized,
{
    validate_inputs(player, legal_actions)?;
    if let [only] = legal_actions {
        return Ok(*only);
    }

    let scores = evaluate_actions(player, information_state, legal_actions, budget, runner)?;
    if let Some(entry) = scores.entries().iter().find(|entry| entry.score.is_nan()) {
        return Err(Error::game_interface(format!(
            "action {} of player {player} scored NaN",
            entry.action
        )));
    }
    scores
        .best()
        .map(|entry| entry.action)
        .ok_or_else(|| Error::game_interface("no candidate action could be scored"))
}

fn validate_inputs(player: PlayerIndex, legal_actions: &[Action]) -> Result<()> {
    validate_player(player)?;
    if legal_actions.is_empty() {
        return Err(Error::invalid_argument(
            "rollout evaluator called with an empty action set",
        ));
    }
    Ok(())
}

/// Agent choosing actions by flat random-rollout evaluation.
///
/// The rollout simulator is injected at construction time.
pub struct RandomRolloutAgent<R> {
    name: String,
    runner: R,
    budget: RolloutBudget,
}

impl<R> RandomRolloutAgent<R> {
    /// Create a rollout agent running `rollouts` playouts per candidate action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `rollouts` is zero.
    pub fn new(name: impl Into<String>, runner: R, rollouts: usize) -> Result<Self> {
        Ok(Self::with_budget(name, runner, RolloutBudget::new(rollouts)?))
    }

    pub fn with_budget(name: impl Into<String>, runner: R, budget: RolloutBudget) -> Self {
        Self {
            name: name.into(),
            runner,
            budget,
        }
    }

    /// Full score table for `legal_actions`, as used by [`Agent::act`].
    pub fn evaluate<I>(
        &mut self,
        player: PlayerIndex,
        information_state: &I,
        legal_actions: &[Action],
    ) -> Result<ActionScores>
    where
        I: InformationState,
        R: RolloutSimulator<I::State>,
    {
        evaluate_actions(
            player,
            information_state,
            legal_actions,
            self.budget,
            &mut self.runner,
        )
    }
}

impl<I, R> Agent<I> for RandomRolloutAgent<R>
where
    I: InformationState,
    R: RolloutSimulator<I::State> + Send,
{
    fn observe(&mut self, _reward: f64, _terminal: bool) {}

    fn act(
        &mut self,
        player: PlayerIndex,
        information_state: &I,
        legal_actions: &[Action],
    ) -> Result<Action> {
        select_action(
            player,
            information_state,
            legal_actions,
            self.budget,
            &mut self.runner,
        )
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.runner.set_rng_seed(seed);
    }
}
