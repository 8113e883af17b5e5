use tracing::{debug, trace};

use crate::board::{Board, Mark, Move, Outcome};
use crate::error::Error;

/// A legal move paired with its game-theoretic value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ScoredMove {
    pub score: i32,
    pub mv: Move,
}

impl ScoredMove {
    pub fn new(score: i32, mv: Move) -> ScoredMove {
        ScoredMove { score, mv }
    }
}

/// The optimal move for the current player, found by exhaustively searching
/// the full game tree: `X` picks the maximum-value child, `O` the minimum.
///
/// Among equally good moves the last one in row-major traversal order wins;
/// together with the fixed order of `legal_moves` this makes the choice
/// deterministic.
pub fn best_move(board: &Board) -> Result<Move, Error> {
    if board.is_terminal() {
        return Err(Error::NoMovesAvailable);
    }
    let scored = score_moves(board);
    let player = board.current_player();
    // max_by_key returns the last maximum; negating the key for the
    // minimizing player keeps the same keep-last behaviour on both sides
    let chosen = match player {
        Mark::X => scored.iter().copied().max_by_key(|m| m.score),
        Mark::O => scored.iter().copied().max_by_key(|m| -m.score),
    }
    .ok_or(Error::NoMovesAvailable)?;
    debug!(player = %player, chosen = %chosen.mv, score = chosen.score, "move selected");
    Ok(chosen.mv)
}

/// Scores every legal move of `board`, in traversal order.
pub fn score_moves(board: &Board) -> Vec<ScoredMove> {
    board
        .legal_moves()
        .map(|mv| {
            let score = value(&board.child(mv));
            trace!(candidate = %mv, score, "root move scored");
            ScoredMove::new(score, mv)
        })
        .collect()
}

// plain minimax: terminal boards score their utility, everything else the
// value of the current player's best child
fn value(board: &Board) -> i32 {
    match board.outcome() {
        Outcome::XWon => 1,
        Outcome::OWon => -1,
        Outcome::Draw => 0,
        Outcome::Ongoing => {
            let children = board.legal_moves().map(|mv| value(&board.child(mv)));
            match board.current_player() {
                Mark::X => children.fold(-i32::MAX, i32::max),
                Mark::O => children.fold(i32::MAX, i32::min),
            }
        }
    }
}

/// Arranges root move scores on the grid; occupied cells stay `None`.
pub fn score_grid(scored: &[ScoredMove]) -> [Option<i32>; 9] {
    let mut grid = [None; 9];
    for m in scored {
        grid[m.mv.index()] = Some(m.score);
    }
    grid
}

pub fn print_score_grid(grid: &[Option<i32>; 9]) {
    for row in grid.chunks(3) {
        let cells: Vec<String> = row
            .iter()
            .map(|score| match score {
                Some(value) => value.to_string(),
                None => ".".to_string(),
            })
            .collect();
        eprintln!("{:>3}, {:>3}, {:>3}", cells[0], cells[1], cells[2]);
    }
}
