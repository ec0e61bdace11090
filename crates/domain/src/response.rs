//! Response snapshot type

use serde::{Deserialize, Serialize};

/// A received HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    #[serde(default)]
    pub body: String,
}

impl ResponseSpec {
    /// Creates a response with the given status and an empty body.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status
    }
}
