//! Optional descriptive arguments attached to an assertion.

use std::fmt;

/// Ordered descriptive values appended to a failure message.
pub type MsgAndArgs<'a> = &'a [&'a dyn fmt::Display];

/// Renders message arguments for a failure report.
///
/// Returns `None` when there are none; a single value renders as itself and
/// several are joined with single spaces.
#[must_use]
pub fn render_message(msg_and_args: MsgAndArgs<'_>) -> Option<String> {
    match msg_and_args {
        [] => None,
        [single] => Some(single.to_string()),
        many => Some(
            many.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}
