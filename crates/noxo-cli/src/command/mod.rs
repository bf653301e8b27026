use clap::{Parser, Subcommand};

use self::{play::PlayArg, selfplay::SelfplayArg};

mod play;
mod selfplay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal, against another player or the computer
    Play(#[clap(flatten)] PlayArg),
    /// Watch two optimal engines play each other on stdout
    Selfplay(#[clap(flatten)] SelfplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Selfplay(arg) => selfplay::run(&arg)?,
    }
    Ok(())
}
