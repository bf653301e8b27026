//! Session management and turn orchestration.
//!
//! [`GameSession`] owns the board and the turn order; every mutation goes
//! through it. In vs-computer mode it consults an [`Opponent`] for the
//! reply and applies it within the same call, so a submitted human move and
//! the computer's answer form a single logical turn advance reported as a
//! [`TurnAdvance`].

pub use self::{opponent::*, session::*};

mod opponent;
mod session;
