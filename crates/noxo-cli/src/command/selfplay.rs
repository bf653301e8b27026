use noxo_engine::{Board, Outcome, Side};
use noxo_solver::Minimax;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SelfplayArg {
    /// Only print the final position and outcome
    #[clap(long)]
    summary: bool,
}

pub(crate) fn run(arg: &SelfplayArg) -> anyhow::Result<()> {
    let minimax = Minimax::new();
    let mut board = Board::EMPTY;
    let mut to_move = Side::X;

    while board.evaluate().is_in_progress() {
        let cell = minimax.best_move(&board, to_move)?;
        board.place(cell, to_move)?;
        if !arg.summary {
            println!("{to_move} plays cell {cell}");
            println!("{board}");
        }
        to_move = to_move.opponent();
    }

    if arg.summary {
        println!("{board}");
    }
    match board.evaluate() {
        Outcome::Win { side, line } => println!("{side} wins on cells {:?}", line.cells()),
        Outcome::Draw => println!("Game Draw!"),
        Outcome::InProgress => unreachable!("the loop only exits on a terminal outcome"),
    }
    Ok(())
}
