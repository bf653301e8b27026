pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move that the rules engine refused to apply.
///
/// The board and session are left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMoveError {
    #[display("cell index {cell} is outside the board")]
    OutOfRange { cell: usize },
    #[display("cell {cell} is already occupied")]
    CellOccupied { cell: usize },
    #[display("it is not {side}'s turn")]
    NotYourTurn { side: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("the game is already over")]
pub struct GameOverError;

/// Raised when a move chooser is consulted on a board with no legal move.
///
/// Unreachable through [`GameSession`], which checks the outcome before
/// consulting its opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal move is available")]
pub struct NoLegalMoveError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MoveError {
    #[display("{_0}")]
    Illegal(IllegalMoveError),
    #[display("{_0}")]
    GameOver(GameOverError),
}
