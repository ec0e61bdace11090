//! Test reporter adapters.

mod harness;
mod recording;

pub use harness::HarnessReporter;
pub use recording::{RecordingReporter, Report, ReportKind};

fn join_display(args: &[&dyn std::fmt::Display]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
