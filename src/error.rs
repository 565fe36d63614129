//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Command failures carry the full taxonomy the dispatcher
//! needs; their `Display` strings are the exact user-facing messages, so
//! the command loop converts errors by kind, never by string comparison.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while handling a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Malformed phone or birthday input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `add` on a name that already has a record
    #[error("This name is already used, change or add some symbols!")]
    DuplicateName(String),

    /// A command referenced a name with no record
    #[error("There is no contact with name {0}.\nIf you want to add - type 'add [name] [number]'")]
    NotFound(String),

    /// Wrong number of positional arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// An explicit `save` failed
    #[error("Failed to save the address book: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while persisting or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the book failed
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// The file exists but doesn't hold a valid address book
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for command handler results
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
