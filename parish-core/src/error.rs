//! Error types for the parish crates.

use thiserror::Error;

/// Errors that can occur in parish operations.
#[derive(Error, Debug)]
pub enum ParishError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for parish operations.
pub type ParishResult<T> = Result<T, ParishError>;
