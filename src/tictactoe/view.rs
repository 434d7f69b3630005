//! Information state for Tic-Tac-Toe
//!
//! The game has perfect information, so a player's view is the board itself
//! and reconstruction is deterministic.

use serde::{Deserialize, Serialize};

use super::TicTacToe;
use crate::{Result, ports::InformationState};

/// What a player observes: the full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardView {
    board: TicTacToe,
}

impl BoardView {
    pub fn new(board: TicTacToe) -> Self {
        Self { board }
    }

    /// Parse a view from a board string such as `"X...O...."`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Reconstruction`] for malformed or unreachable boards.
    pub fn from_string(s: &str) -> Result<Self> {
        Ok(Self::new(TicTacToe::from_string(s)?))
    }

    pub fn board(&self) -> &TicTacToe {
        &self.board
    }

    pub fn into_board(self) -> TicTacToe {
        self.board
    }
}

impl InformationState for BoardView {
    type State = TicTacToe;

    fn create_game_state(&self) -> Result<TicTacToe> {
        self.board.validate()?;
        Ok(self.board)
    }
}
