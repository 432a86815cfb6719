//! Command routing for the interactive assistant.
//!
//! This module turns lines of user text into directory operations and reply
//! strings, and drives the read-eval-print loop.

pub mod command;
pub mod handlers;
pub mod session;

pub use command::{parse_input, Command, ParsedInput};
pub use handlers::{Assistant, Outcome};
pub use session::run_session;
