//! Error types for the site controller
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! None of these reach the visitor: they are logged and the affected
//! feature is skipped. Contact form rejections use
//! [`ValidationError`](crate::features::contact::ValidationError) instead.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// JSON deserialization error (site configuration block)
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// Browser storage could not be read or written
    #[snafu(display("Storage error: {message}"))]
    Storage { message: String },

    /// A feature could not bind to an element it requires
    #[snafu(display("Missing element #{id}"))]
    MissingElement { id: String },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
