use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;
use strum_macros::Display;
use tracing_subscriber::EnvFilter;

use tictactoe_solver::{
    best_move, print_score_grid, score_grid, score_moves, Board, Error, Mark, Move,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
enum Controller {
    Human,
    Solver,
    Random,
}

#[derive(Parser)]
#[command(
    name = "tictactoe-solver",
    version,
    about = "Play tic-tac-toe against an exhaustive minimax solver"
)]
struct Cli {
    /// Who controls X (moves first)
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    x: Controller,

    /// Who controls O
    #[arg(long, value_enum, default_value_t = Controller::Solver)]
    o: Controller,

    /// Print the solver's score for every legal move before each turn
    #[arg(long)]
    analyze: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let mut board = Board::empty();
    loop {
        println!("{board}");
        if board.is_terminal() {
            match board.winner() {
                Some(mark) => println!("{mark} wins"),
                None => println!("draw"),
            }
            return Ok(());
        }

        if cli.analyze {
            print_score_grid(&score_grid(&score_moves(&board)));
        }

        let player = board.current_player();
        let controller = match player {
            Mark::X => cli.x,
            Mark::O => cli.o,
        };
        let mv = match controller {
            Controller::Human => prompt_move(&board, player)?,
            Controller::Solver => best_move(&board)?,
            Controller::Random => random_move(&board)?,
        };
        println!("{player} plays {mv}");
        board = board.apply(mv)?;
    }
}

fn prompt_move(board: &Board, player: Mark) -> Result<Move> {
    let stdin = io::stdin();
    loop {
        print!("{player} move (row col): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before the game finished");
        }
        let mut parts = line.split_whitespace().map(str::parse::<usize>);
        match (parts.next(), parts.next()) {
            (Some(Ok(row)), Some(Ok(col))) => {
                let mv = Move::new(row, col);
                if board.apply(mv).is_ok() {
                    return Ok(mv);
                }
                println!("cell ({row}, {col}) is not playable");
            }
            _ => println!("expected two numbers in 0..=2, e.g. `1 2`"),
        }
    }
}

fn random_move(board: &Board) -> Result<Move> {
    let moves: Vec<Move> = board.legal_moves().collect();
    let mv = moves
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or(Error::NoMovesAvailable)?;
    Ok(mv)
}
