//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone or birthday value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// No record is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

impl BookError {
    /// Whether this error reports a missing phone or contact.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound(_) | Self::ContactNotFound(_))
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors produced while handling one command line.
///
/// None of these end the session; the assistant renders them for the user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Invalid command.")]
    InvalidCommand,

    /// The command got the wrong number of arguments
    #[error("Invalid arguments. Usage: {usage}")]
    InvalidArguments { usage: &'static str },

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// A record or book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Saving the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
