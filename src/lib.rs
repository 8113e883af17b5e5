//! Exhaustive solver for 3x3 tic-tac-toe.
//!
//! The board is a pure value, the rules are pure derivations over it, and
//! [`best_move`] searches the complete game tree to find a provably optimal
//! move for whoever's turn it is.

pub mod board;
pub mod error;
pub mod rules;
pub mod solver;

pub use board::{Board, Cell, Mark, Move, Outcome, SIZE};
pub use error::Error;
pub use solver::{best_move, print_score_grid, score_grid, score_moves, ScoredMove};
