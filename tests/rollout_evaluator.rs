//! Behavioural tests of the rollout action evaluator against scripted games.

mod common;

use common::{FixedOutcomeSimulator, ScriptedInfo, SimulatorCall, budget};
use rollout_agents::{
    Error, RandomRolloutAgent, RolloutBudget, evaluate_actions,
    ports::Agent,
    select_action,
    simulation::RandomRolloutRunner,
};

const EPS: f64 = 1e-12;

#[test]
fn end_to_end_first_maximum_wins() {
    // 10 ends the game with +1; 20 and 30 are decided by rollouts.
    let info = ScriptedInfo::new(0, &[(10, 1.0, true), (20, 0.0, false), (30, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new()
        .with_outcome(20, [2.0, -2.0])
        .with_outcome(30, [-1.0, 1.0]);

    let scores = evaluate_actions(0, &info, &[10, 20, 30], budget(4), &mut simulator).unwrap();
    let values: Vec<f64> = scores.entries().iter().map(|entry| entry.score).collect();
    assert_eq!(values, vec![1.0, 1.0, -0.5]);

    let action = select_action(0, &info, &[10, 20, 30], budget(4), &mut simulator).unwrap();
    assert_eq!(action, 10);
}

#[test]
fn zero_sum_contribution_for_both_players() {
    let v = 3.0;
    let rollouts = 6;
    for (player, expected) in [(0, 2.0 * v / 6.0), (1, -2.0 * v / 6.0)] {
        let info = ScriptedInfo::new(player, &[(1, 0.0, false)]);
        let mut simulator = FixedOutcomeSimulator::new().with_outcome(1, [v, -v]);

        let scores = evaluate_actions(player, &info, &[1], budget(rollouts), &mut simulator)
            .unwrap();
        assert!(
            (scores.entries()[0].score - expected).abs() < EPS,
            "player {player}: got {}, expected {expected}",
            scores.entries()[0].score
        );
    }
}

#[test]
fn immediate_score_is_sign_flipped_for_player_one() {
    // Raw scores are from player 0's perspective.
    let info = ScriptedInfo::new(1, &[(4, -1.0, true), (5, 1.0, true)]);
    let mut simulator = FixedOutcomeSimulator::new();

    let scores = evaluate_actions(1, &info, &[4, 5], budget(3), &mut simulator).unwrap();
    assert_eq!(scores.entries()[0].score, 1.0);
    assert_eq!(scores.entries()[1].score, -1.0);
    assert_eq!(
        select_action(1, &info, &[4, 5], budget(3), &mut simulator).unwrap(),
        4
    );
}

#[test]
fn non_terminal_immediate_score_is_averaged_with_rollouts() {
    let info = ScriptedInfo::new(0, &[(7, 0.5, false)]);
    let mut simulator = FixedOutcomeSimulator::new().with_outcome(7, [1.0, -1.0]);

    let scores = evaluate_actions(0, &info, &[7], budget(5), &mut simulator).unwrap();
    assert!((scores.entries()[0].score - (0.5 + 2.0) / 5.0).abs() < EPS);
}

#[test]
fn terminal_branch_skips_simulator_and_division() {
    let info = ScriptedInfo::new(0, &[(1, 1.0, true), (2, 0.0, false), (3, -1.0, true)]);
    let mut simulator = FixedOutcomeSimulator::new().with_outcome(2, [4.0, -4.0]);

    let scores = evaluate_actions(0, &info, &[1, 2, 3], budget(8), &mut simulator).unwrap();

    assert_eq!(
        simulator.calls(),
        &[SimulatorCall {
            leaf: Some(2),
            budget: 8
        }]
    );
    let entries = scores.entries();
    assert!(entries[0].terminal && entries[2].terminal);
    assert!(!entries[1].terminal);
    assert_eq!(entries[0].score, 1.0);
    assert_eq!(entries[2].score, -1.0);
    assert_eq!(entries[1].score, 1.0);
}

#[test]
fn every_action_gets_its_own_reconstruction() {
    let info = ScriptedInfo::new(0, &[(1, 0.0, false), (2, 0.0, false), (3, 0.0, true)]);
    let mut simulator = FixedOutcomeSimulator::new();

    evaluate_actions(0, &info, &[1, 2, 3], budget(2), &mut simulator).unwrap();

    assert_eq!(info.reconstructions(), 3);
    assert_eq!(simulator.visited(), vec![Some(1), Some(2)]);
}

#[test]
fn single_action_returned_without_rollouts() {
    let info = ScriptedInfo::new(0, &[(42, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new();

    let action = select_action(0, &info, &[42], budget(16), &mut simulator).unwrap();
    assert_eq!(action, 42);
    assert!(simulator.calls().is_empty());
    assert_eq!(info.reconstructions(), 0);
}

#[test]
fn empty_actions_rejected() {
    let info = ScriptedInfo::new(0, &[(1, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new();

    let err = select_action(0, &info, &[], budget(4), &mut simulator).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    let err = evaluate_actions(0, &info, &[], budget(4), &mut simulator).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let mut agent = RandomRolloutAgent::new("Rollout", FixedOutcomeSimulator::new(), 4).unwrap();
    let err = agent.act(0, &info, &[]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(simulator.calls().is_empty());
}

#[test]
fn non_positive_budget_rejected() {
    for rollouts in [0_i64, -1, -100] {
        let err = RolloutBudget::try_from(rollouts).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
    let err = RandomRolloutAgent::new("Rollout", FixedOutcomeSimulator::new(), 0)
        .err()
        .unwrap();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn out_of_range_player_rejected() {
    let info = ScriptedInfo::new(0, &[(1, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new();
    let err = select_action(2, &info, &[1], budget(1), &mut simulator).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn reconstruction_error_propagates_unchanged() {
    let info = ScriptedInfo::inconsistent(0, &[(1, 0.0, false), (2, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new();

    let err = select_action(0, &info, &[1, 2], budget(4), &mut simulator).unwrap_err();
    assert!(matches!(err, Error::Reconstruction { .. }));
    assert!(simulator.calls().is_empty());
}

#[test]
fn illegal_action_error_propagates_unchanged() {
    let info = ScriptedInfo::new(0, &[(1, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new();

    let err = select_action(0, &info, &[1, 99], budget(4), &mut simulator).unwrap_err();
    assert!(matches!(
        err,
        Error::IllegalAction {
            player: 0,
            action: 99,
            ..
        }
    ));
}

#[test]
fn simulator_failure_aborts_evaluation() {
    let info = ScriptedInfo::new(0, &[(1, 1.0, true), (2, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::failing("playout crashed");

    let err = select_action(0, &info, &[1, 2], budget(4), &mut simulator).unwrap_err();
    match err {
        Error::GameInterface { message } => assert_eq!(message, "playout crashed"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nan_score_aborts_selection() {
    let info = ScriptedInfo::new(0, &[(1, f64::NAN, true), (2, -1.0, true)]);
    let mut simulator = FixedOutcomeSimulator::new();

    let err = select_action(0, &info, &[1, 2], budget(4), &mut simulator).unwrap_err();
    match err {
        Error::GameInterface { message } => assert!(message.contains("action 1")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nan_rollout_outcome_aborts_selection() {
    let info = ScriptedInfo::new(1, &[(1, 0.0, true), (2, 0.0, false)]);
    let mut simulator = FixedOutcomeSimulator::new().with_outcome(2, [f64::NAN, 0.0]);

    let err = select_action(1, &info, &[1, 2], budget(2), &mut simulator).unwrap_err();
    assert!(matches!(err, Error::GameInterface { .. }));
}

#[test]
fn choice_is_reproducible_with_fixed_outcomes() {
    let script = [(1, 0.0, false), (2, 0.0, false), (3, 0.0, false)];
    let choose = || {
        let info = ScriptedInfo::new(0, &script);
        let mut simulator = FixedOutcomeSimulator::new()
            .with_outcome(1, [1.0, -1.0])
            .with_outcome(2, [3.0, -3.0])
            .with_outcome(3, [3.0, -3.0]);
        select_action(0, &info, &[1, 2, 3], budget(10), &mut simulator).unwrap()
    };
    for _ in 0..5 {
        assert_eq!(choose(), 2);
    }
}

#[test]
fn seeded_agents_agree_on_real_rollouts() {
    use rollout_agents::tictactoe::BoardView;

    let view = BoardView::from_string("X...O....").unwrap();
    let legal = view.board().legal_moves();
    let mut first = RandomRolloutAgent::new("A", RandomRolloutRunner::with_seed(11), 24).unwrap();
    let mut second = RandomRolloutAgent::new("B", RandomRolloutRunner::with_seed(11), 24).unwrap();

    for _ in 0..3 {
        assert_eq!(
            first.act(0, &view, &legal).unwrap(),
            second.act(0, &view, &legal).unwrap()
        );
    }
}
