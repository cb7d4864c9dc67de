//! Error types for pawcal.
//!
//! Booking rejections (overlaps, bad ranges, locked events) are not errors;
//! see [`crate::commit::Commit`].

use thiserror::Error;

/// Errors that can occur in pawcal operations.
#[derive(Error, Debug)]
pub enum PawcalError {
    #[error("Unknown calendar category '{0}'. Expected one of: Personal, Business, Family, Holiday, ETC")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PawcalError {
    fn from(err: serde_json::Error) -> Self {
        PawcalError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for PawcalError {
    fn from(err: reqwest::Error) -> Self {
        PawcalError::Remote(err.to_string())
    }
}

/// Result type alias for pawcal operations.
pub type PawcalResult<T> = Result<T, PawcalError>;
