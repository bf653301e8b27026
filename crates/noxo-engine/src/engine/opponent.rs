use std::fmt;

use crate::{
    NoLegalMoveError,
    core::{Board, Side},
};

/// Move chooser consulted by [`GameSession`](super::GameSession) when the
/// active side is computer-controlled.
///
/// Implementations must return an empty cell for any in-progress board; the
/// session treats anything else as a programming error.
pub trait Opponent: fmt::Debug {
    /// Chooses the cell `side` should mark on `board`.
    fn choose_move(&self, board: &Board, side: Side) -> Result<usize, NoLegalMoveError>;
}
