//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// The display text is shown to the user verbatim, so it stays short.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("phone must be 10 digits")]
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY` or is not a real date.
    #[error("invalid date format, expected DD.MM.YYYY")]
    InvalidBirthday(String),
}
