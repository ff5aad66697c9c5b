//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::errors`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The book file is not a valid address book document
    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the book failed
    #[error("Failed to serialize address book: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A .env file exists but could not be loaded
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that a single command can produce.
///
/// None of these end the command loop; they are rendered as a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for a known command
    #[error("Command format is incorrect. Usage: {usage}")]
    WrongArguments { usage: &'static str },

    /// An argument failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("No contact named '{name}' found.{}", suggestion_suffix(.suggestions))]
    ContactNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// The first token is not a known command
    #[error("Invalid command.")]
    UnknownCommand(String),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Loading or saving the address book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean: {}?", suggestions.join(", "))
    }
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
