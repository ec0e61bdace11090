//! Recording reporter

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use apitest_application::TestReporter;

use super::join_display;

/// Whether a report was recorded as a non-fatal error or a fatal abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Recorded through `error`.
    Error,
    /// Recorded through `fatal` or `fatal_fmt`.
    Fatal,
}

/// A single recorded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// How the report was raised.
    pub kind: ReportKind,
    /// The rendered message.
    pub message: String,
}

/// Reporter that records every report and never aborts.
///
/// Safe to share between threads. Intended for testing code that drives a
/// [`Verifier`](apitest_application::Verifier) through failure paths.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<Report>>,
}

impl RecordingReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Report>> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, kind: ReportKind, message: String) {
        self.lock().push(Report { kind, message });
    }

    /// Returns a snapshot of all reports, oldest first.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.lock().clone()
    }

    /// Returns the messages of non-fatal reports.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(ReportKind::Error)
    }

    /// Returns the messages of fatal reports.
    #[must_use]
    pub fn fatals(&self) -> Vec<String> {
        self.messages(ReportKind::Fatal)
    }

    fn messages(&self, kind: ReportKind) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Returns true if anything was reported.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the number of reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards all reports.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl TestReporter for RecordingReporter {
    fn error(&self, args: fmt::Arguments<'_>) {
        self.record(ReportKind::Error, args.to_string());
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.record(ReportKind::Fatal, join_display(args));
    }

    fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        self.record(ReportKind::Fatal, args.to_string());
    }
}
