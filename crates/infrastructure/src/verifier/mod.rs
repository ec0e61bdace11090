//! Verifier adapters.
//!
//! [`DefaultVerifier`] delegates to the [`assertions`](crate::assertions)
//! engine; [`NoopVerifier`] accepts everything.

mod delegating;
mod noop;

pub use delegating::{DefaultVerifier, default_verifier};
pub use noop::NoopVerifier;
