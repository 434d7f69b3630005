//! Observer implementations for arena matches

use std::sync::{Arc, Mutex, PoisonError};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use super::GameRecord;
use crate::{Result, ports::MatchObserver, types::NUM_PLAYERS};

/// Progress bar observer - Shows match progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: [usize; NUM_PLAYERS],
    draws: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: [0; NUM_PLAYERS],
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("P0:{} D:{} P1:{}", self.wins[0], self.draws, self.wins[1])
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        match record.winner() {
            Some(player) => self.wins[player] += 1,
            None => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Summary of game-length metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub total_moves: usize,
    pub shortest_game: Option<usize>,
    pub longest_game: Option<usize>,
}

impl MetricsSummary {
    /// Get average game length
    pub fn avg_game_length(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.total_games as f64
        }
    }
}

/// Metrics observer - Tracks game lengths
///
/// Clones share the same summary, so keep one clone to read the metrics after
/// the observer has been handed to an [`Arena`](super::Arena).
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    summary: Arc<Mutex<MetricsSummary>>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the metrics collected so far
    pub fn summary(&self) -> MetricsSummary {
        self.summary
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MatchObserver for MetricsObserver {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        *self.summary.lock().unwrap_or_else(PoisonError::into_inner) = MetricsSummary::default();
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, record: &GameRecord) -> Result<()> {
        let moves = record.actions.len();
        let mut summary = self.summary.lock().unwrap_or_else(PoisonError::into_inner);
        summary.total_games += 1;
        summary.total_moves += moves;
        summary.shortest_game = Some(summary.shortest_game.map_or(moves, |m| m.min(moves)));
        summary.longest_game = Some(summary.longest_game.map_or(moves, |m| m.max(moves)));
        Ok(())
    }
}
