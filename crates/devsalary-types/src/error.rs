//! Error types for devsalary.

use thiserror::Error;

use crate::Platform;

/// Result type alias for devsalary operations.
pub type Result<T> = std::result::Result<T, DevsalaryError>;

/// Errors that can occur while collecting and rendering salary statistics.
#[derive(Error, Debug)]
pub enum DevsalaryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A name-to-ID lookup found nothing and the run is configured to abort.
    #[error("{platform}: could not resolve {subject} '{query}'")]
    Unresolved {
        /// Platform the lookup was made against.
        platform: Platform,
        /// What was being resolved (e.g. "area", "town").
        subject: &'static str,
        /// The name that was looked up.
        query: String,
    },

    /// Required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}
