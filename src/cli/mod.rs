//! Interactive command layer
//!
//! This module parses the text commands typed at the prompt, runs them
//! against the session's address book through the service layer and prints
//! the replies.

pub mod command;
pub mod handlers;
pub mod repl;
pub mod session;

pub use command::Command;
pub use handlers::{handle, render_error, respond, Reply};
pub use repl::{run, PROMPT};
pub use session::Session;
