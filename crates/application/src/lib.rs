//! Apitest Application - Verification ports and use cases
//!
//! This crate defines the capabilities a test run plugs into: the
//! [`TestReporter`](ports::TestReporter) that records failures and the
//! [`Verifier`](ports::Verifier) that performs assertions. Adapters live in
//! the infrastructure crate.

pub mod ports;
pub mod use_cases;

pub use ports::{Comparable, MsgAndArgs, TestReporter, Verifier, render_message};
pub use use_cases::check_response;
