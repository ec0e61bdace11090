//! Aligned `Label:  content` blocks for failure messages.

use std::fmt::Write as _;

/// One labeled section of a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledContent<'a> {
    /// Section label, without the trailing colon.
    pub label: &'a str,
    /// Section body; may span several lines.
    pub content: &'a str,
}

impl<'a> LabeledContent<'a> {
    /// Creates a labeled section.
    #[must_use]
    pub const fn new(label: &'a str, content: &'a str) -> Self {
        Self { label, content }
    }
}

/// Renders sections with their labels padded to a common width.
///
/// Continuation lines of multi-line content are indented to line up with the
/// first line.
///
/// ```
/// use apitest_infrastructure::assertions::{LabeledContent, labeled_output};
///
/// let out = labeled_output(&[
///     LabeledContent::new("Error", "Not equal:\nexpected: 1"),
///     LabeledContent::new("Messages", "status check"),
/// ]);
/// assert_eq!(
///     out,
///     "\tError:   \tNot equal:\n\t         \texpected: 1\n\tMessages:\tstatus check\n"
/// );
/// ```
#[must_use]
pub fn labeled_output(content: &[LabeledContent<'_>]) -> String {
    let width = content.iter().map(|c| c.label.len()).max().unwrap_or(0) + 1;
    let continuation = format!("\n\t{}\t", " ".repeat(width));

    let mut out = String::new();
    for section in content {
        let label = format!("{}:", section.label);
        let body = section.content.trim_end_matches('\n').replace('\n', &continuation);
        let _ = writeln!(out, "\t{label:<width$}\t{body}");
    }
    out
}
