//! Interactive front end: a numbered menu driving one graph.

pub mod menu;
pub mod prompter;
pub mod session;

pub use menu::{MenuCommand, COMMANDS};
pub use prompter::Prompter;
pub use session::{OutputFormat, Session, SessionOptions};
