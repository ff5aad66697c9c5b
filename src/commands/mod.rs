//! Command layer: parsing, dispatch and the interactive loop.

pub mod clock;
pub mod handler;
pub mod parser;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use handler::CommandHandler;
pub use parser::Command;
pub use session::Session;
