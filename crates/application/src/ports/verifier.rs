//! Verifier port

use std::error::Error;

use super::{Comparable, MsgAndArgs, TestReporter};

/// Port for performing assertions.
///
/// Consumers inject an implementation to choose the assertion backend; the
/// infrastructure crate provides a delegating verifier and a no-op one.
/// Every method returns whether the check passed. Failures are reported
/// through `reporter`, never through the return value alone.
pub trait Verifier: Send + Sync {
    /// Asserts that two values are structurally equal.
    fn equal(
        &self,
        reporter: &dyn TestReporter,
        expected: &dyn Comparable,
        actual: &dyn Comparable,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool;

    /// Asserts that two strings hold equivalent JSON documents.
    fn json_eq(
        &self,
        reporter: &dyn TestReporter,
        expected: &str,
        actual: &str,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool;

    /// Reports a failure unconditionally.
    fn fail(
        &self,
        reporter: &dyn TestReporter,
        failure_message: &str,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool;

    /// Asserts that no error occurred.
    fn no_error(
        &self,
        reporter: &dyn TestReporter,
        err: Option<&dyn Error>,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool;
}

impl<V: Verifier + ?Sized> Verifier for Box<V> {
    fn equal(
        &self,
        reporter: &dyn TestReporter,
        expected: &dyn Comparable,
        actual: &dyn Comparable,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        (**self).equal(reporter, expected, actual, msg_and_args)
    }

    fn json_eq(
        &self,
        reporter: &dyn TestReporter,
        expected: &str,
        actual: &str,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        (**self).json_eq(reporter, expected, actual, msg_and_args)
    }

    fn fail(
        &self,
        reporter: &dyn TestReporter,
        failure_message: &str,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        (**self).fail(reporter, failure_message, msg_and_args)
    }

    fn no_error(
        &self,
        reporter: &dyn TestReporter,
        err: Option<&dyn Error>,
        msg_and_args: MsgAndArgs<'_>,
    ) -> bool {
        (**self).no_error(reporter, err, msg_and_args)
    }
}
