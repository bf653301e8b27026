use std::time::Duration;

use crate::tui::Tui;

use self::app::PlayApp;

mod app;
mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Delay before the computer's reply is revealed, in milliseconds
    #[clap(long, default_value_t = 500)]
    reply_delay_ms: u64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self { reply_delay_ms: 500 }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let mut app = PlayApp::new(Duration::from_millis(arg.reply_delay_ms));
    Tui::new().run(&mut app)
}
