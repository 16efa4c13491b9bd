//! Error types for sqlbrick

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for sqlbrick operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sqlbrick
///
/// Every failure is a validation error raised at the call site before any
/// state is mutated; nothing is retried or deferred.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("invalid argument: {message}")]
    #[diagnostic(code(sqlbrick::invalid_argument))]
    InvalidArgument { message: String },
}

impl Error {
    /// Build an `InvalidArgument` error from a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}
