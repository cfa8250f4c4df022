//! Error handling module for audioext

use thiserror::Error;

/// Main error type for extraction operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Invalid file selection input
    #[error("Invalid file selection: '{input}'")]
    InvalidSelection { input: String },

    /// Invalid time format
    #[error("Invalid time format: '{time}'. Expected MM:SS or seconds")]
    InvalidTime { time: String },

    /// Time range validation error
    #[error("Invalid time range: end ({end}s) must be after start ({start}s)")]
    InvalidRange { start: u32, end: u32 },

    /// Encoder process could not be started
    #[error("Failed to launch encoder '{encoder}': {source}")]
    EncoderLaunch {
        encoder: String,
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
