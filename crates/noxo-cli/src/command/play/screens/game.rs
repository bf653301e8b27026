use crossterm::event::{Event, KeyCode};
use noxo_engine::{GameSession, Outcome, Placement, Side};
use noxo_solver::Minimax;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Text,
    widgets::Block,
};

use crate::ui::widgets::{BoardDisplay, style};

use super::{ScreenTransition, StartRequest};

/// The board, the status line, and the turn input.
///
/// While the computer's reply is pending its mark is already on the board;
/// this screen just hides it for a few ticks so the human move registers
/// visually first.
#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    cursor: usize,
    reply_delay_ticks: u32,
    pending_reply: Option<PendingReply>,
    notice: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct PendingReply {
    placement: Placement,
    ticks_left: u32,
}

impl GameScreen {
    pub fn new(request: StartRequest, reply_delay_ticks: u32) -> Self {
        let session = match request {
            StartRequest::TwoPlayer { player1, player2 } => {
                GameSession::two_player(player1, player2)
            }
            StartRequest::VsComputer { player1 } => {
                GameSession::vs_computer(player1, Box::new(Minimax::new()))
            }
        };
        Self {
            session,
            cursor: 4,
            reply_delay_ticks,
            pending_reply: None,
            notice: None,
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_event() else {
            return ScreenTransition::Stay;
        };

        match key.code {
            KeyCode::Char('q') => return ScreenTransition::Exit,
            KeyCode::Char('b') => return ScreenTransition::ToSetup,
            KeyCode::Char('r') => {
                self.restart();
                return ScreenTransition::Stay;
            }
            _ => {}
        }

        // Cell input is suspended until the pending reply is revealed.
        if self.pending_reply.is_some() {
            return ScreenTransition::Stay;
        }

        match key.code {
            // Deltas are taken mod 3, so 2 steps forward == 1 step back.
            KeyCode::Left => self.move_cursor(0, 2),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(2, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor),
            KeyCode::Char(ch @ '1'..='9') => {
                let cell = ch as usize - '1' as usize;
                self.cursor = cell;
                self.submit(cell);
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    pub fn update(&mut self) {
        if let Some(pending) = &mut self.pending_reply {
            pending.ticks_left -= 1;
            if pending.ticks_left == 0 {
                self.pending_reply = None;
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let board = BoardDisplay::new(self.session.board())
            .cursor(self.display_cursor())
            .winning_line(if self.pending_reply.is_none() {
                self.session.outcome().winning_line()
            } else {
                None
            })
            .hidden_cell(self.pending_reply.map(|pending| pending.placement.cell))
            .block(Block::bordered().border_style(style::GRID));

        let help = if self.session.state().is_playing() {
            "Controls: ← → ↑ ↓ (Move) | Enter/1-9 (Mark) | R (Restart) | B (Back) | Q (Quit)"
        } else {
            "Controls: R (Restart) | B (Back) | Q (Quit)"
        };

        let [status_area, board_area, notice_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(board.height()),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [board_area] = Layout::horizontal([Constraint::Length(board.width())])
            .flex(Flex::Center)
            .areas(board_area);

        frame.render_widget(
            Text::styled(self.status_line(), style::STATUS).centered(),
            status_area,
        );
        frame.render_widget(&board, board_area);
        if let Some(notice) = &self.notice {
            frame.render_widget(
                Text::styled(notice.as_str(), style::NOTICE).centered(),
                notice_area,
            );
        }
        frame.render_widget(Text::styled(help, style::HELP).centered(), help_area);
    }

    fn status_line(&self) -> String {
        if self.pending_reply.is_some() {
            return format!("{}'s turn", self.session.name_of(Side::O));
        }
        match self.session.outcome() {
            Outcome::InProgress => {
                let side = self
                    .session
                    .active_side()
                    .expect("in-progress session has an active side");
                format!("{}'s turn", self.session.name_of(side))
            }
            Outcome::Win { side, .. } => format!("{} has won!", self.session.name_of(side)),
            Outcome::Draw => "Game Draw!".to_owned(),
        }
    }

    fn display_cursor(&self) -> Option<usize> {
        (self.session.state().is_playing() && self.pending_reply.is_none()).then_some(self.cursor)
    }

    fn move_cursor(&mut self, d_row: usize, d_col: usize) {
        let row = (self.cursor / 3 + d_row) % 3;
        let col = (self.cursor % 3 + d_col) % 3;
        self.cursor = row * 3 + col;
    }

    fn submit(&mut self, cell: usize) {
        match self.session.submit_move(cell) {
            Ok(advance) => {
                self.notice = None;
                if let Some(reply) = advance.reply()
                    && self.reply_delay_ticks > 0
                {
                    self.pending_reply = Some(PendingReply {
                        placement: reply,
                        ticks_left: self.reply_delay_ticks,
                    });
                }
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    fn restart(&mut self) {
        self.session.reset();
        self.pending_reply = None;
        self.notice = None;
        self.cursor = 4;
    }
}
