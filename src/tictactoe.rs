//! Tic-Tac-Toe reference game
//!
//! A small perfect-information, two-player zero-sum game implementing the
//! game ports. Player 0 is X and always opens.

pub mod board;
pub mod lines;
pub mod view;

pub use board::{Cell, Player, TicTacToe};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use view::BoardView;
