use thiserror::Error;

/// Errors surfaced by the solver's public API.
///
/// Every variant marks a contract violation by the caller rather than a
/// recoverable runtime condition; the library never retries or corrects.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// The move points outside the grid or at an occupied cell.
    #[error("invalid move ({row}, {col}): cell is occupied or out of range")]
    InvalidMove { row: usize, col: usize },

    /// `utility` was queried on a board that is still in progress.
    #[error("utility is undefined while the game is in progress")]
    UndefinedState,

    /// `best_move` was queried on a board where the game is already over.
    #[error("no moves available: the game is already over")]
    NoMovesAvailable,
}
