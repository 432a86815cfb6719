//! Contact Assistant - an interactive command-line contact book.
//!
//! Stores names, phone numbers, and birthdays in memory and reports which
//! contacts have a birthday coming up, moving weekend dates to Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record
//! - **directory**: Name-keyed collection and the birthday window query
//! - **assistant**: Command parsing, dispatch, and the interactive loop
//! - **clock**: Source of today's date
//! - **config**: Configuration from environment variables
//! - **error**: Error types for records, commands, and configuration

pub mod assistant;
pub mod clock;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{run_session, Assistant, Command, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use directory::{ContactDirectory, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::ContactRecord;
