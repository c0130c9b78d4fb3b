//! Custom error types for teller-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! User-input problems (invalid amounts, insufficient funds, bad menu input)
//! are not represented here; they are handled inside the menu loop and never
//! become program-level failures.

use thiserror::Error;

/// The main error type for teller-cli operations
#[derive(Error, Debug)]
pub enum TellerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (reading or writing the account record)
    #[error("Storage error: {0}")]
    Storage(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TellerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for teller-cli operations
pub type TellerResult<T> = Result<T, TellerError>;
