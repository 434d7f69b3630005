//! Observer port - abstraction for match observation and data collection
//!
//! This port defines the interface for observing arena events, allowing
//! progress reporting and metrics without coupling the match loop to a
//! specific output format.

use crate::{Result, arena::GameRecord};

/// Observer trait for monitoring a match between two agents
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - Once at the beginning
/// 2. `on_game_end(game_num, record)` - After every finished game
/// 3. `on_match_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use rollout_agents::{arena::GameRecord, ports::MatchObserver};
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl MatchObserver for CountingObserver {
///     fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> rollout_agents::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait MatchObserver: Send {
    /// Called when the match starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each game with its final record.
    fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> Result<()> {
        Ok(())
    }

    /// Called when the match ends.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
