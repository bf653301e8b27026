pub use self::{board::*, line::*, outcome::*, side::*};

pub(crate) mod board;
pub(crate) mod line;
pub(crate) mod outcome;
pub(crate) mod side;
