//! Match configuration, results and the game loop

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Agent, GameState, MatchObserver, Perceive},
    simulation::DEFAULT_MAX_STEPS,
    types::{Action, NUM_PLAYERS, PlayerIndex, validate_player},
    utils::perspective_sign,
};

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed handed to the agents (player 1 receives `seed + 1`)
    pub seed: Option<u64>,

    /// Safety bound on the number of moves in one game
    pub max_moves: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            max_moves: DEFAULT_MAX_STEPS,
        }
    }
}

/// Record of one finished game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Actions in the order they were played
    pub actions: Vec<Action>,

    /// Sum of step scores from player 0's perspective
    pub score: f64,
}

impl GameRecord {
    /// Winner by cumulative score; `None` is a draw.
    pub fn winner(&self) -> Option<PlayerIndex> {
        if self.score > 0.0 {
            Some(0)
        } else if self.score < 0.0 {
            Some(1)
        } else {
            None
        }
    }
}

/// Result of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Agent names by player slot
    pub players: [String; NUM_PLAYERS],

    /// Total games played
    pub games: usize,

    /// Wins by player slot
    pub wins: [usize; NUM_PLAYERS],

    /// Number of draws
    pub draws: usize,
}

impl MatchResult {
    /// Fraction of games won by `player`
    pub fn win_rate(&self, player: PlayerIndex) -> f64 {
        if self.games > 0 {
            self.wins[player] as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn draw_rate(&self) -> f64 {
        if self.games > 0 {
            self.draws as f64 / self.games as f64
        } else {
            0.0
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a series of games between two agents
pub struct Arena {
    config: ArenaConfig,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the arena
    pub fn with_observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `config.games` games from `initial`; `agents[i]` controls player `i`.
    ///
    /// # Errors
    ///
    /// Any agent, game or observer error aborts the match.
    pub fn run<S: Perceive>(
        &mut self,
        initial: &S,
        mut agents: [&mut dyn Agent<S::Info>; NUM_PLAYERS],
    ) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            for (offset, agent) in agents.iter_mut().enumerate() {
                agent.set_rng_seed(seed.wrapping_add(offset as u64));
            }
        }

        let mut result = MatchResult {
            players: [agents[0].name().to_string(), agents[1].name().to_string()],
            games: 0,
            wins: [0; NUM_PLAYERS],
            draws: 0,
        };

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        for game_num in 0..self.config.games {
            let record = self.play_game(initial, &mut agents)?;
            match record.winner() {
                Some(player) => result.wins[player] += 1,
                None => result.draws += 1,
            }
            result.games += 1;

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &record)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        info!(
            "match finished: {} games, {} {} wins, {} {} wins, {} draws",
            result.games,
            result.players[0],
            result.wins[0],
            result.players[1],
            result.wins[1],
            result.draws
        );
        Ok(result)
    }

    fn play_game<S: Perceive>(
        &self,
        initial: &S,
        agents: &mut [&mut dyn Agent<S::Info>; NUM_PLAYERS],
    ) -> Result<GameRecord> {
        let mut record = GameRecord::default();
        let mut state = initial.clone();
        let mut terminal = state.is_terminal();

        while !terminal {
            if record.actions.len() >= self.config.max_moves {
                warn!(
                    "game aborted after {} moves without reaching a terminal state",
                    record.actions.len()
                );
                return Err(Error::StepLimitExceeded {
                    limit: self.config.max_moves,
                });
            }

            let player = state.current_player();
            validate_player(player)?;
            let legal = state.legal_actions(player);
            let info = state.information_state(player);
            let action = agents[player].act(player, &info, &legal)?;

            let step = state.step(player, action)?;
            for (index, agent) in agents.iter_mut().enumerate() {
                agent.observe(perspective_sign(index) * step.score, step.terminal);
            }

            record.actions.push(action);
            record.score += step.score;
            state = step.state;
            terminal = step.terminal;
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        agents::RandomAgent,
        tictactoe::{BoardView, TicTacToe},
    };

    #[test]
    fn test_random_vs_random_match() {
        let config = ArenaConfig {
            games: 30,
            seed: Some(42),
            ..ArenaConfig::default()
        };
        let mut first = RandomAgent::new("First");
        let mut second = RandomAgent::new("Second");

        let result = Arena::new(config)
            .run(&TicTacToe::new(), [&mut first, &mut second])
            .unwrap();

        assert_eq!(result.games, 30);
        assert_eq!(result.wins[0] + result.wins[1] + result.draws, 30);
        assert_eq!(result.players, ["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_seeded_match_is_reproducible() {
        let config = ArenaConfig {
            games: 20,
            seed: Some(7),
            ..ArenaConfig::default()
        };
        let play = || {
            let mut first = RandomAgent::new("First");
            let mut second = RandomAgent::new("Second");
            Arena::new(config.clone())
                .run(&TicTacToe::new(), [&mut first, &mut second])
                .unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_move_limit_aborts_game() {
        let config = ArenaConfig {
            games: 1,
            seed: Some(1),
            max_moves: 3,
        };
        let mut first = RandomAgent::new("First");
        let mut second = RandomAgent::new("Second");
        let err = Arena::new(config)
            .run(&TicTacToe::new(), [&mut first, &mut second])
            .unwrap_err();
        assert!(matches!(err, Error::StepLimitExceeded { limit: 3 }));
    }

    /// Logs every reward it observes and plays the first legal action.
    struct RecordingAgent {
        observed: Vec<(f64, bool)>,
    }

    impl Agent<BoardView> for RecordingAgent {
        fn observe(&mut self, reward: f64, terminal: bool) {
            self.observed.push((reward, terminal));
        }

        fn act(
            &mut self,
            _player: PlayerIndex,
            _information_state: &BoardView,
            legal_actions: &[Action],
        ) -> Result<Action> {
            legal_actions
                .first()
                .copied()
                .ok_or_else(|| Error::invalid_argument("no legal action"))
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    #[test]
    fn test_both_agents_observe_flipped_rewards() {
        // X to move; the first legal cell (2) completes the top row
        let start = TicTacToe::from_string("XX.OO....").unwrap();
        let mut first = RecordingAgent {
            observed: Vec::new(),
        };
        let mut second = RecordingAgent {
            observed: Vec::new(),
        };

        let config = ArenaConfig {
            games: 1,
            ..ArenaConfig::default()
        };
        let result = Arena::new(config)
            .run(&start, [&mut first, &mut second])
            .unwrap();

        assert_eq!(result.wins, [1, 0]);
        assert_eq!(first.observed, vec![(1.0, true)]);
        assert_eq!(second.observed, vec![(-1.0, true)]);
    }

    #[test]
    fn test_non_terminal_steps_are_observed_by_both() {
        // First-legal-cell play: X 0, O 1, X 2, O 3, X 4, O 5, X 6 wins on 2-4-6
        let mut first = RecordingAgent {
            observed: Vec::new(),
        };
        let mut second = RecordingAgent {
            observed: Vec::new(),
        };
        let config = ArenaConfig {
            games: 1,
            ..ArenaConfig::default()
        };
        Arena::new(config)
            .run(&TicTacToe::new(), [&mut first, &mut second])
            .unwrap();

        let mut expected_first = vec![(0.0, false); 6];
        expected_first.push((1.0, true));
        let mut expected_second = vec![(0.0, false); 6];
        expected_second.push((-1.0, true));
        assert_eq!(first.observed, expected_first);
        assert_eq!(second.observed, expected_second);
    }

    #[test]
    fn test_match_result_load_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match MatchResult::load(&path).unwrap_err() {
            Error::Io { operation, .. } => {
                assert!(operation.contains("missing.json"), "{operation}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_game_record_winner() {
        let record = GameRecord {
            actions: vec![0, 3, 1, 4, 2],
            score: 1.0,
        };
        assert_eq!(record.winner(), Some(0));
        assert_eq!(GameRecord::default().winner(), None);
    }
}
