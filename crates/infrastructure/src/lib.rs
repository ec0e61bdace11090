//! Apitest Infrastructure - Verifier and reporter adapters
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer, plus the assertion engine the default verifier
//! delegates to.

pub mod assertions;
pub mod reporter;
pub mod verifier;

pub use reporter::{HarnessReporter, RecordingReporter, Report, ReportKind};
pub use verifier::{DefaultVerifier, NoopVerifier, default_verifier};
