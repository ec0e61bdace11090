//! Test reporter port

use std::fmt;

/// Port for recording assertion failures in the enclosing test framework.
///
/// `error` records a failure and lets the test continue. The `fatal` forms
/// record a failure and abort the current test, which in a Rust test harness
/// means panicking. Test doubles may record fatal reports without unwinding.
pub trait TestReporter {
    /// Records a formatted, non-fatal failure.
    fn error(&self, args: fmt::Arguments<'_>);

    /// Records the given values, separated by spaces, and aborts the test.
    fn fatal(&self, args: &[&dyn fmt::Display]);

    /// Records a formatted failure and aborts the test.
    fn fatal_fmt(&self, args: fmt::Arguments<'_>);
}

impl<R: TestReporter + ?Sized> TestReporter for &R {
    fn error(&self, args: fmt::Arguments<'_>) {
        (**self).error(args);
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        (**self).fatal(args);
    }

    fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).fatal_fmt(args);
    }
}
