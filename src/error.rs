//! Error types for pagenav

use thiserror::Error;

/// Result type alias for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;

/// Navigation error types
///
/// These carry the diagnostic detail. The message shown to users is always
/// the fixed [`LOAD_FAILED_MESSAGE`](crate::navigator::LOAD_FAILED_MESSAGE),
/// whatever the variant; the variant itself only reaches the logs.
#[derive(Error, Debug)]
pub enum NavError {
    /// Fetch did not complete within its timeout bound
    #[error("fetch timed out")]
    Timeout,

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Transport-level failure (connect, TLS, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid base URL or page identifier
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
