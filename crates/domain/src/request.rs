//! Request snapshot type

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// The request that produced a response under test.
///
/// Assertions receive it alongside the response; the status predicates
/// ignore it, and failure reports name its method and URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method, upper-cased.
    pub method: String,
    /// Target URL
    pub url: Url,
}

impl RequestSpec {
    /// Creates a request snapshot for the given method and URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL cannot be parsed.
    pub fn new(method: &str, url: &str) -> DomainResult<Self> {
        let url = Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            method: method.to_ascii_uppercase(),
            url,
        })
    }

    /// Creates a GET request snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL cannot be parsed.
    pub fn get(url: &str) -> DomainResult<Self> {
        Self::new("GET", url)
    }
}
