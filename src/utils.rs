//! Numeric helpers shared across agents and simulators.

use crate::types::{NUM_PLAYERS, PlayerIndex};

/// Sign converting a player-0 score into `player`'s perspective.
///
/// Two-player zero-sum convention: player 0 keeps the sign, player 1 flips it.
pub fn perspective_sign(player: PlayerIndex) -> f64 {
    if player == 0 { 1.0 } else { -1.0 }
}

/// The other participant in a two-player game.
pub fn opponent_of(player: PlayerIndex) -> PlayerIndex {
    (player + 1) % NUM_PLAYERS
}

/// Index of the largest value; the first index wins ties.
///
/// NaN entries never win. Returns `None` for an empty slice or one holding
/// only NaN.
///
/// # Examples
///
/// ```
/// use rollout_agents::utils::argmax;
///
/// assert_eq!(argmax(&[0.5, 1.0, 1.0]), Some(1));
/// assert_eq!(argmax(&[]), None);
/// ```
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_stable_tie_break() {
        assert_eq!(argmax(&[1.0, 1.0, -0.5]), Some(0));
        assert_eq!(argmax(&[-2.0, 3.0, 3.0, 3.0]), Some(1));
    }

    #[test]
    fn test_argmax_skips_nan() {
        assert_eq!(argmax(&[f64::NAN, -1.0]), Some(1));
        assert_eq!(argmax(&[f64::NAN]), None);
    }

    #[test]
    fn test_argmax_handles_infinities() {
        assert_eq!(argmax(&[f64::NEG_INFINITY, -1e300]), Some(1));
        assert_eq!(argmax(&[f64::NEG_INFINITY]), Some(0));
    }

    #[test]
    fn test_perspective_sign_and_opponent() {
        assert_eq!(perspective_sign(0), 1.0);
        assert_eq!(perspective_sign(1), -1.0);
        assert_eq!(opponent_of(0), 1);
        assert_eq!(opponent_of(1), 0);
    }
}
