//! API error types

use std::string::{FromUtf16Error, FromUtf8Error};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The argument is not a text value
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the argument was rejected
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// UTF-16 conversion error
    #[error("UTF-16 error: {0}")]
    Utf16(#[from] FromUtf16Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Shorthand for [`ApiError::InvalidInput`]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
