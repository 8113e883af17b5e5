use itertools::iproduct;

use crate::board::{Board, Cell, Mark, Move, Outcome, SIZE};
use crate::error::Error;

impl Board {
    /// Whose turn it is, derived from the mark counts: `X` when both have
    /// played equally often (including the empty board), otherwise the mark
    /// that is behind. Boards unreachable by alternating play are not
    /// validated here.
    pub fn current_player(&self) -> Mark {
        let xs = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let os = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if xs > os {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Every empty cell, in row-major order. The order is what makes the
    /// solver's tie-break deterministic.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        iproduct!(0..SIZE, 0..SIZE)
            .map(|(row, col)| Move::new(row, col))
            .filter(move |&mv| self.cell(mv) == Cell::Empty)
    }

    /// Places the current player's mark and returns the resulting board,
    /// leaving `self` untouched.
    pub fn apply(&self, mv: Move) -> Result<Board, Error> {
        if mv.row >= SIZE || mv.col >= SIZE || self.cell(mv) != Cell::Empty {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(self.child(mv))
    }

    // move placement without the validation; only for moves that came out
    // of `legal_moves`
    pub(crate) fn child(&self, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = Cell::from(self.current_player());
        next
    }

    /// The mark completing a winning line, if any. On (unreachable) boards
    /// where several lines are complete the first one in check order wins:
    /// rows, then columns, then diagonals.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|line| self.cells[line[0]].mark())
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Mark::X) => Outcome::XWon,
            Some(Mark::O) => Outcome::OWon,
            None if self.cells.iter().any(|&c| c == Cell::Empty) => Outcome::Ongoing,
            None => Outcome::Draw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// The signed result from X's perspective: 1 if X won, -1 if O won,
    /// 0 for a draw. Asking before the game is over is a contract violation
    /// and reported as `Error::UndefinedState`.
    pub fn utility(&self) -> Result<i32, Error> {
        match self.outcome() {
            Outcome::XWon => Ok(1),
            Outcome::OWon => Ok(-1),
            Outcome::Draw => Ok(0),
            Outcome::Ongoing => Err(Error::UndefinedState),
        }
    }
}
