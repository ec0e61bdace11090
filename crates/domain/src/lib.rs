//! Apitest Domain - Core testing types
//!
//! This crate defines the request/response snapshots that assertions run
//! against, and the status-code predicates built on them.
//! All types here are pure Rust with no I/O dependencies.

pub mod assert;
pub mod error;
pub mod request;
pub mod response;

pub use assert::{Assert, is_client_error, is_server_error, is_success};
pub use error::{AssertError, DomainError, DomainResult};
pub use request::RequestSpec;
pub use response::ResponseSpec;
