//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Client error type.
///
/// Only local and transport problems end up here. A response with a non-200
/// status is not an error; it is returned as [`crate::Outcome::Failure`].
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection refused, DNS, TLS, timeout...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A local file could not be read.
    #[error("File not found or unreadable: {}: {source}", path.display())]
    FileRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a local file error.
    pub fn is_file_error(&self) -> bool {
        matches!(self, Error::FileRead { .. })
    }

    /// Check if the server could not be reached at all.
    pub fn is_connect_error(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_connect())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
