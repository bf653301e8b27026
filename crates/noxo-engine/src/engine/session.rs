use arrayvec::ArrayVec;

use crate::{
    GameOverError, IllegalMoveError, MoveError,
    core::{Board, Outcome, Side},
};

use super::opponent::Opponent;

/// How a session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameMode {
    TwoPlayer,
    VsComputer,
}

/// Whether the session still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// A single mark added to the board during a turn advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub cell: usize,
    pub side: Side,
}

/// Everything that happened during one [`GameSession::submit_move`] call:
/// the submitted placement, the chained computer reply when there was one,
/// and the outcome afterwards.
///
/// The reply is included so the presentation layer can pace its reveal
/// without re-deriving it; the session state already reflects both marks.
#[derive(Debug, Clone)]
pub struct TurnAdvance {
    placements: ArrayVec<Placement, 2>,
    outcome: Outcome,
}

impl TurnAdvance {
    /// The marks added to the board, in application order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The computer's reply, when one was chained onto this advance.
    #[must_use]
    pub fn reply(&self) -> Option<Placement> {
        self.placements.get(1).copied()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Game controller: owns the board, the turn order, and the player roster.
///
/// A session starts on an empty board with `X` to move and stays the sole
/// owner of board mutation. Once the outcome is decided, further moves fail
/// with [`GameOverError`] until [`GameSession::reset`].
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    active_side: Side,
    mode: GameMode,
    names: [String; 2],
    opponent: Option<Box<dyn Opponent>>,
}

impl GameSession {
    /// Starts a two-player session.
    #[must_use]
    pub fn two_player(x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        Self {
            board: Board::EMPTY,
            active_side: Side::X,
            mode: GameMode::TwoPlayer,
            names: [x_name.into(), o_name.into()],
            opponent: None,
        }
    }

    /// Starts a session against a computer opponent.
    ///
    /// The human plays `X` and always moves first; the computer plays `O`
    /// under the name "Bot".
    #[must_use]
    pub fn vs_computer(x_name: impl Into<String>, opponent: Box<dyn Opponent>) -> Self {
        Self {
            board: Board::EMPTY,
            active_side: Side::X,
            mode: GameMode::VsComputer,
            names: [x_name.into(), "Bot".to_owned()],
            opponent: Some(opponent),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Derives the outcome from the current board.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.outcome().is_in_progress() {
            SessionState::Playing
        } else {
            SessionState::GameOver
        }
    }

    /// The side to move, or `None` once the game is over.
    #[must_use]
    pub fn active_side(&self) -> Option<Side> {
        self.state().is_playing().then_some(self.active_side)
    }

    #[must_use]
    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::X => &self.names[0],
            Side::O => &self.names[1],
        }
    }

    /// Submits a move for the active side.
    ///
    /// In vs-computer mode, a successful human move that leaves the game in
    /// progress is answered immediately: the computer's reply is chosen and
    /// applied before this call returns, and both marks are reported in the
    /// [`TurnAdvance`]. There is no observable "computer is thinking" state.
    pub fn submit_move(&mut self, cell: usize) -> Result<TurnAdvance, MoveError> {
        self.apply_move(cell, self.active_side)
    }

    /// Applies a move for `side`, validating in order: the game is not over,
    /// it is `side`'s turn, and the cell is playable.
    ///
    /// Every failure leaves the session unchanged.
    pub fn apply_move(&mut self, cell: usize, side: Side) -> Result<TurnAdvance, MoveError> {
        if self.state().is_game_over() {
            return Err(GameOverError.into());
        }
        if side != self.active_side {
            return Err(IllegalMoveError::NotYourTurn { side }.into());
        }
        self.board.place(cell, side)?;

        let mut placements = ArrayVec::new();
        placements.push(Placement { cell, side });

        if self.outcome().is_in_progress() {
            self.active_side = side.opponent();
            if self.mode.is_vs_computer() && self.active_side == Side::O {
                placements.push(self.computer_reply());
            }
        }

        Ok(TurnAdvance {
            placements,
            outcome: self.outcome(),
        })
    }

    fn computer_reply(&mut self) -> Placement {
        let opponent = self
            .opponent
            .as_deref()
            .expect("vs-computer session holds an opponent");
        let cell = opponent
            .choose_move(&self.board, Side::O)
            .expect("opponent consulted on an in-progress board");
        self.board
            .place(cell, Side::O)
            .expect("opponent must choose an empty cell");
        if self.outcome().is_in_progress() {
            self.active_side = Side::X;
        }
        Placement {
            cell,
            side: Side::O,
        }
    }

    /// Starts the session over: empty board, `X` to move.
    ///
    /// Mode, opponent, and player names are retained.
    pub fn reset(&mut self) {
        self.board = Board::EMPTY;
        self.active_side = Side::X;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted opponent that always takes the lowest empty cell.
    #[derive(Debug)]
    struct FirstEmpty;

    impl Opponent for FirstEmpty {
        fn choose_move(&self, board: &Board, _side: Side) -> Result<usize, crate::NoLegalMoveError> {
            board.empty_cells().next().ok_or(crate::NoLegalMoveError)
        }
    }

    #[test]
    fn test_new_session_observations() {
        let session = GameSession::two_player("Alice", "Bob");
        assert_eq!(session.active_side(), Some(Side::X));
        assert!(session.state().is_playing());
        assert!(session.outcome().is_in_progress());
        assert_eq!(session.name_of(Side::X), "Alice");
        assert_eq!(session.name_of(Side::O), "Bob");
        assert_eq!(session.board().move_count(), 0);
    }

    #[test]
    fn test_two_player_turns_alternate() {
        let mut session = GameSession::two_player("Alice", "Bob");

        let advance = session.submit_move(4).unwrap();
        assert_eq!(advance.placements(), [Placement { cell: 4, side: Side::X }]);
        assert_eq!(advance.reply(), None);
        assert_eq!(session.active_side(), Some(Side::O));

        session.submit_move(0).unwrap();
        assert_eq!(session.active_side(), Some(Side::X));
    }

    #[test]
    fn test_apply_move_rejects_wrong_side() {
        let mut session = GameSession::two_player("Alice", "Bob");
        let err = session.apply_move(4, Side::O).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal(IllegalMoveError::NotYourTurn { side: Side::O })
        );
        assert_eq!(session.active_side(), Some(Side::X));
        assert_eq!(session.board().move_count(), 0);
    }

    #[test]
    fn test_illegal_moves_leave_session_unchanged() {
        let mut session = GameSession::two_player("Alice", "Bob");
        session.submit_move(4).unwrap();
        let board_before = *session.board();

        assert!(session.submit_move(4).is_err());
        assert!(session.submit_move(9).is_err());
        assert_eq!(*session.board(), board_before);
        assert_eq!(session.active_side(), Some(Side::O));
    }

    #[test]
    fn test_win_ends_the_session() {
        let mut session = GameSession::two_player("Alice", "Bob");
        // X: 0, 1, 2 (top row); O: 3, 4
        for cell in [0, 3, 1, 4] {
            session.submit_move(cell).unwrap();
        }
        let advance = session.submit_move(2).unwrap();

        assert_eq!(advance.outcome().winner(), Some(Side::X));
        assert!(session.state().is_game_over());
        assert_eq!(session.active_side(), None);

        let err = session.submit_move(5).unwrap_err();
        assert_eq!(err, MoveError::GameOver(GameOverError));
    }

    #[test]
    fn test_vs_computer_chains_reply_as_one_advance() {
        let mut session = GameSession::vs_computer("Alice", Box::new(FirstEmpty));
        assert_eq!(session.name_of(Side::O), "Bot");

        let advance = session.submit_move(4).unwrap();
        assert_eq!(
            advance.placements(),
            [
                Placement { cell: 4, side: Side::X },
                Placement { cell: 0, side: Side::O },
            ]
        );
        // Control is back with the human after the chained reply.
        assert_eq!(session.active_side(), Some(Side::X));
        assert_eq!(session.board().move_count(), 2);
    }

    #[test]
    fn test_vs_computer_no_reply_after_winning_move() {
        let mut session = GameSession::vs_computer("Alice", Box::new(FirstEmpty));
        // X takes 4, 5, then 3 to complete the middle row while FirstEmpty
        // fills 0 and 1.
        session.submit_move(4).unwrap();
        session.submit_move(5).unwrap();
        let advance = session.submit_move(3).unwrap();

        assert_eq!(advance.outcome().winner(), Some(Side::X));
        assert_eq!(advance.reply(), None);
        assert!(session.state().is_game_over());
    }

    #[test]
    fn test_reset_restores_start_state() {
        let mut session = GameSession::vs_computer("Alice", Box::new(FirstEmpty));
        session.submit_move(4).unwrap();
        session.submit_move(5).unwrap();
        session.submit_move(3).unwrap();
        assert!(session.state().is_game_over());

        session.reset();
        assert!(session.state().is_playing());
        assert_eq!(session.active_side(), Some(Side::X));
        assert_eq!(*session.board(), Board::EMPTY);
        assert!(session.mode().is_vs_computer());
        assert_eq!(session.name_of(Side::X), "Alice");

        // The retained opponent still answers after a reset.
        let advance = session.submit_move(4).unwrap();
        assert!(advance.reply().is_some());
    }
}
