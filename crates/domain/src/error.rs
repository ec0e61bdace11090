//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building request snapshots.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error returned by an [`Assert`](crate::Assert) when a response does not
/// satisfy it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertError {
    /// The status code is outside `[200, 400)`.
    #[error("not success. Status code={0}")]
    NotSuccess(u16),

    /// The status code is outside `[400, 500)`.
    #[error("not a client error. Status code={0}")]
    NotClientError(u16),

    /// The status code is below 500.
    #[error("not a server error. Status code={0}")]
    NotServerError(u16),

    /// A caller-defined assertion failed.
    #[error("{0}")]
    Custom(String),
}

impl AssertError {
    /// Creates an error for a caller-defined assertion.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Returns the observed status code, if the error came from a status predicate.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotSuccess(code) | Self::NotClientError(code) | Self::NotServerError(code) => {
                Some(*code)
            }
            Self::Custom(_) => None,
        }
    }
}
