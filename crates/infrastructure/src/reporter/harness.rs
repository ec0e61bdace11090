//! Reporter for the Rust test harness.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

use apitest_application::TestReporter;

use super::join_display;

/// Reporter that maps reports onto the Rust test harness.
///
/// `error` records the failure and lets the test keep running. `fatal` and
/// `fatal_fmt` panic at once. When the reporter is dropped with recorded
/// failures it panics with all of them, failing the test.
///
/// ```should_panic
/// use apitest_application::Verifier;
/// use apitest_infrastructure::{DefaultVerifier, HarnessReporter};
///
/// let t = HarnessReporter::new("status check");
/// DefaultVerifier::new().equal(&t, &200, &404, &[]);
/// // `t` panics here, listing the mismatch.
/// ```
#[derive(Debug)]
pub struct HarnessReporter {
    name: String,
    failures: Mutex<Vec<String>>,
}

impl HarnessReporter {
    /// Creates a reporter for the named test.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Returns the test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true if a non-fatal failure was recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.lock().is_empty()
    }

    /// Returns the recorded non-fatal failures.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.lock().clone()
    }

    #[allow(clippy::panic)]
    fn abort(&self, message: &str) {
        tracing::error!(test = %self.name, "{message}");
        let mut report = format!("{}: {message}", self.name);
        let earlier = self.lock();
        if !earlier.is_empty() {
            report.push_str("\nearlier failures:\n");
            report.push_str(&earlier.join("\n"));
        }
        drop(earlier);
        panic!("{report}");
    }
}

impl TestReporter for HarnessReporter {
    fn error(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        tracing::warn!(test = %self.name, "{message}");
        self.lock().push(message);
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.abort(&join_display(args));
    }

    fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        self.abort(&args.to_string());
    }
}

impl Drop for HarnessReporter {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        let failures = std::mem::take(
            self.failures
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner),
        );
        assert!(
            failures.is_empty(),
            "{}: {} assertion(s) failed:\n{}",
            self.name,
            failures.len(),
            failures.join("\n")
        );
    }
}
