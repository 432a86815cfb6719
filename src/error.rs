//! Error types for the contact assistant.
//!
//! Validation of single values lives in [`crate::domain::ValidationError`].
//! The enums here cover record operations, command dispatch, and
//! configuration loading.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The phone to edit is not on the record
    #[error("old phone does not exist")]
    PhoneNotFound(String),

    /// A replacement value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while executing a user command.
///
/// Every variant is turned into reply text at the dispatch boundary, so the
/// display strings are the exact messages the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer arguments than the command needs
    #[error("Give me name and phone please.")]
    MissingArguments,

    /// A command that takes a contact name got no arguments
    #[error("Enter user name.")]
    MissingName,

    /// No contact is stored under the given name
    #[error("Contact doesn't exist.")]
    ContactNotFound(String),

    /// Record operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Input value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
