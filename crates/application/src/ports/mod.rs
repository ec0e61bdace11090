//! Port definitions (interfaces)
//!
//! Ports define the boundaries between test code and the assertion backend.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod comparable;
mod message;
mod reporter;
mod verifier;

pub use comparable::Comparable;
pub use message::{MsgAndArgs, render_message};
pub use reporter::TestReporter;
pub use verifier::Verifier;
