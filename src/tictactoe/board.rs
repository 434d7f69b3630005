//! Board state representation and game-port implementation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, view::BoardView};
use crate::{
    Error, Result,
    ports::{GameState, Perceive, Step},
    types::{Action, PlayerIndex},
};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Player slot used by the game ports (X = 0, O = 1)
    pub fn index(self) -> PlayerIndex {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    pub fn from_index(index: PlayerIndex) -> Option<Player> {
        match index {
            0 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// Copy-sized (10 bytes), so every [`GameState::step`] returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Cell; 9],
    to_move: Player,
}

impl TicTacToe {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        TicTacToe {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Assemble a board without checking that it is reachable.
    ///
    /// Use [`TicTacToe::validate`] (or go through [`BoardView`]) before
    /// playing from it.
    pub fn from_cells(cells: [Cell; 9], to_move: Player) -> Self {
        TicTacToe { cells, to_move }
    }

    /// Parse a board from 9 cell characters (`.`, `X`, `O`), e.g. `"XX.OO...."`.
    ///
    /// Whitespace is ignored and the player to move is derived from the
    /// piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reconstruction`] if the string is malformed or the
    /// position is unreachable.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(Error::Reconstruction {
                message: format!("expected 9 cells, got {} in '{s}'", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::Reconstruction {
                message: format!("invalid character '{c}' at position {i} in '{s}'"),
            })?;
        }

        let (x, o) = Self::count_pieces(&cells);
        let to_move = if x == o { Player::X } else { Player::O };
        let board = TicTacToe { cells, to_move };
        board.validate()?;
        Ok(board)
    }

    fn count_pieces(cells: &[Cell; 9]) -> (usize, usize) {
        cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// Check that the position is reachable from the empty board with X opening.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reconstruction`] describing the first inconsistency.
    pub fn validate(&self) -> Result<()> {
        let (x, o) = Self::count_pieces(&self.cells);
        let inconsistent = |reason: String| Error::Reconstruction {
            message: format!("board '{}': {reason}", self.encode()),
        };

        let expected_turn = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(inconsistent(format!(
                "invalid piece counts X={x}, O={o} (must be equal or X ahead by 1)"
            )));
        };
        if self.to_move != expected_turn {
            return Err(inconsistent(format!(
                "{:?} to move contradicts piece counts X={x}, O={o}",
                self.to_move
            )));
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);
        if x_wins && o_wins {
            return Err(inconsistent("both players have a winning line".to_string()));
        }
        if x_wins && x != o + 1 {
            return Err(inconsistent("X won but O moved afterwards".to_string()));
        }
        if o_wins && x != o {
            return Err(inconsistent("O won but X moved afterwards".to_string()));
        }
        Ok(())
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Cell at position (0-8); `None` outside the board
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Make a move for the player to move and return a new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<TicTacToe> {
        let illegal = |reason: &str| Error::IllegalAction {
            player: self.to_move.index(),
            action: pos,
            reason: reason.to_string(),
        };

        if pos >= 9 {
            return Err(illegal("position is out of bounds (must be 0-8)"));
        }
        if self.is_over() {
            return Err(illegal("game already over"));
        }
        if self.cells[pos] != Cell::Empty {
            return Err(illegal("position is already occupied"));
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Zero-sum score from X's perspective: +1 X won, -1 O won, 0 otherwise
    pub fn score(&self) -> f64 {
        match self.winner() {
            Some(Player::X) => 1.0,
            Some(Player::O) => -1.0,
            None => 0.0,
        }
    }

    /// Compact string encoding, e.g. `XX.OO...._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            match self.to_move {
                Player::X => 'X',
                Player::O => 'O',
            }
        )
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl GameState for TicTacToe {
    fn step(&self, player: PlayerIndex, action: Action) -> Result<Step<Self>> {
        if player != self.to_move.index() {
            return Err(Error::IllegalAction {
                player,
                action,
                reason: format!("it is {:?}'s turn", self.to_move),
            });
        }

        let state = self.make_move(action)?;
        Ok(Step {
            score: state.score(),
            terminal: state.is_over(),
            state,
        })
    }

    fn current_player(&self) -> PlayerIndex {
        self.to_move.index()
    }

    fn legal_actions(&self, player: PlayerIndex) -> Vec<Action> {
        if player == self.to_move.index() {
            self.legal_moves()
        } else {
            Vec::new()
        }
    }

    fn is_terminal(&self) -> bool {
        self.is_over()
    }
}

impl Perceive for TicTacToe {
    type Info = BoardView;

    fn information_state(&self, _player: PlayerIndex) -> BoardView {
        BoardView::new(*self)
    }
}
