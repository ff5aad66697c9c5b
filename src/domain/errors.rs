//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur when validating raw user input into domain values.
///
/// Every variant is recoverable: the command layer renders it as a message
/// and keeps accepting input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty or whitespace only.
    #[error("Contact name cannot be empty.")]
    EmptyName,

    /// The phone number is not exactly 10 digits.
    #[error("Phone number should contain 10 digits.")]
    InvalidPhoneFormat(String),

    /// The date is not a real calendar date in `DD.MM.YYYY` form.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
