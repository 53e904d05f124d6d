//! Result and error types for the core library
//!
//! Every operation boundary returns one of these discriminated kinds; the
//! caller (CLI or any other front-end) maps them to user-facing messages.
//! Nothing in the core signals failure through panics or sentinel values.

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    // === Authentication ===
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    // === Authorization ===
    #[error("Operation not permitted")]
    Forbidden,

    // === Validation ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("Incorrect old password")]
    IncorrectOldPassword,

    #[error("No password is set")]
    NoPasswordSet,

    #[error("The user {0} already exists")]
    UserAlreadyExists(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    // === Range ===
    #[error("Transaction index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    // === Storage ===
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a catch-all internal error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
