//! Response assertions.
//!
//! An [`Assert`] inspects a response (and the request that produced it) and
//! returns an [`AssertError`] describing why the response is unacceptable.
//! The predicates here classify a response by its status-code range.

use crate::error::AssertError;
use crate::request::RequestSpec;
use crate::response::ResponseSpec;

/// A check run against a response and its originating request.
pub type Assert = fn(&ResponseSpec, &RequestSpec) -> Result<(), AssertError>;

/// Passes for status codes in `[200, 400)`.
///
/// # Errors
///
/// Returns [`AssertError::NotSuccess`] for any other status code.
pub fn is_success(response: &ResponseSpec, _request: &RequestSpec) -> Result<(), AssertError> {
    let code = response.status_code();
    if (200..400).contains(&code) {
        return Ok(());
    }
    Err(AssertError::NotSuccess(code))
}

/// Passes for status codes in `[400, 500)`.
///
/// # Errors
///
/// Returns [`AssertError::NotClientError`] for any other status code.
pub fn is_client_error(
    response: &ResponseSpec,
    _request: &RequestSpec,
) -> Result<(), AssertError> {
    let code = response.status_code();
    if (400..500).contains(&code) {
        return Ok(());
    }
    Err(AssertError::NotClientError(code))
}

/// Passes for status codes of 500 and above. There is no upper bound.
///
/// # Errors
///
/// Returns [`AssertError::NotServerError`] for status codes below 500.
pub const fn is_server_error(
    response: &ResponseSpec,
    _request: &RequestSpec,
) -> Result<(), AssertError> {
    let code = response.status_code();
    if code >= 500 {
        return Ok(());
    }
    Err(AssertError::NotServerError(code))
}
