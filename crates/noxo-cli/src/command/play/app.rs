use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::screens::{GameScreen, Screen, ScreenTransition, SetupScreen},
    tui::{App, Tui},
};

const TICK_RATE: f64 = 20.0;

#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
    reply_delay_ticks: u32,
    is_exiting: bool,
}

impl PlayApp {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            screen: Screen::Setup(SetupScreen::new()),
            reply_delay_ticks: (reply_delay.as_secs_f64() * TICK_RATE).round() as u32,
            is_exiting: false,
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(TICK_RATE);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        match self.screen.handle_event(&event) {
            ScreenTransition::Stay => {}
            ScreenTransition::ToGame(request) => {
                self.screen = Screen::Game(GameScreen::new(request, self.reply_delay_ticks));
            }
            ScreenTransition::ToSetup => {
                self.screen = Screen::Setup(SetupScreen::new());
            }
            ScreenTransition::Exit => {
                self.is_exiting = true;
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update();
    }
}
