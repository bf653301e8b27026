use crossterm::event::Event;
use ratatui::Frame;

pub use self::{game::GameScreen, setup::SetupScreen};

mod game;
mod setup;

/// Session parameters collected by the setup screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartRequest {
    TwoPlayer { player1: String, player2: String },
    VsComputer { player1: String },
}

/// Requested screen change, returned from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    Stay,
    ToGame(StartRequest),
    ToSetup,
    Exit,
}

#[derive(Debug)]
pub enum Screen {
    Setup(SetupScreen),
    Game(GameScreen),
}

impl Screen {
    pub fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        match self {
            Screen::Setup(screen) => screen.handle_event(event),
            Screen::Game(screen) => screen.handle_event(event),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self {
            Screen::Setup(screen) => screen.draw(frame),
            Screen::Game(screen) => screen.draw(frame),
        }
    }

    pub fn update(&mut self) {
        match self {
            Screen::Setup(_) => {}
            Screen::Game(screen) => screen.update(),
        }
    }
}
