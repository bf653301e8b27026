use super::{line::Line, side::Side};

/// Terminal status of a board, derived by [`Board::evaluate`](super::Board::evaluate).
///
/// Never stored: always recomputed from the board so it cannot drift out of
/// sync with the cell contents. A win carries the decided [`Line`] so the
/// presentation layer can highlight its three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    InProgress,
    Win { side: Side, line: Line },
    Draw,
}

impl Outcome {
    /// The winning side, if the game has been won.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Win { side, .. } => Some(side),
            Self::InProgress | Self::Draw => None,
        }
    }

    /// The decided line, if the game has been won.
    #[must_use]
    pub fn winning_line(self) -> Option<Line> {
        match self {
            Self::Win { line, .. } => Some(line),
            Self::InProgress | Self::Draw => None,
        }
    }
}
