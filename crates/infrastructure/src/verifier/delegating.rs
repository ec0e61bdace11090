//! Delegating verifier

use std::error::Error;

use apitest_application::{Comparable, MsgAndArgs, TestReporter, Verifier};

use crate::assertions;

/// Verifier that performs real assertions through the assertion engine.
///
/// Failures are recorded with the reporter's non-fatal `error`, so a test
/// keeps running after a mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVerifier;

impl DefaultVerifier {
    /// Creates a new delegating verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Returns the verifier used when a consumer does not inject one.
#[must_use]
pub fn default_verifier() -> Box<dyn Verifier> {
    Box::new(DefaultVerifier::new())
}

impl Verifier for DefaultVerifier {
    fn equal(
        &self,
        reporter: &dyn TestReporter,
        expected: &dyn Comparable,
        actual: &dyn Comparable,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        assertions::equal(reporter, expected, actual, msg_and_args)
    }

    fn json_eq(
        &self,
        reporter: &dyn TestReporter,
        expected: &str,
        actual: &str,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        assertions::json_eq(reporter, expected, actual, msg_and_args)
    }

    fn fail(
        &self,
        reporter: &dyn TestReporter,
        failure_message: &str,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        assertions::fail(reporter, failure_message, msg_and_args)
    }

    fn no_error(
        &self,
        reporter: &dyn TestReporter,
        err: Option<&dyn Error>,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        assertions::no_error(reporter, err, msg_and_args)
    }
}
