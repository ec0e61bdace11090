//! Assertion engine.
//!
//! Free functions that check a condition, report a labeled failure message
//! through a [`TestReporter`] when it does not hold, and return whether it
//! held. Only the non-fatal [`TestReporter::error`] is ever used.

mod json;
mod labeled;

use std::error::Error;
use std::fmt::Write as _;

use apitest_application::{Comparable, MsgAndArgs, TestReporter, render_message};
use pretty_assertions::Comparison;

pub use json::{
    JsonError, MAX_DEPTH as JSON_MAX_DEPTH, equivalent as json_equivalent, parse as parse_json,
};
pub use labeled::{LabeledContent, labeled_output};

/// Asserts that two values are equal.
pub fn equal(
    reporter: &dyn TestReporter,
    expected: &dyn Comparable,
    actual: &dyn Comparable,
    msg_and_args: MsgAndArgs<'_>,
) -> bool {
    if expected.eq_dyn(actual) {
        return true;
    }

    let message = if expected.type_name() == actual.type_name() {
        format!(
            "Not equal: \nexpected: {expected:?}\nactual  : {actual:?}\n\nDiff:\n{}",
            Comparison::new(expected, actual)
        )
    } else {
        format!(
            "Not equal: \nexpected: {}({expected:?})\nactual  : {}({actual:?})",
            expected.type_name(),
            actual.type_name()
        )
    };
    fail(reporter, &message, msg_and_args)
}

/// Asserts that two strings are equivalent JSON documents.
pub fn json_eq(
    reporter: &dyn TestReporter,
    expected: &str,
    actual: &str,
    msg_and_args: MsgAndArgs<'_>,
) -> bool {
    let expected_value = match json::parse(expected) {
        Ok(value) => value,
        Err(e) => {
            return fail(
                reporter,
                &format!(
                    "Expected value ('{expected}') is not valid json.\nJSON parsing error: '{e}'"
                ),
                msg_and_args,
            );
        }
    };
    let actual_value = match json::parse(actual) {
        Ok(value) => value,
        Err(e) => {
            return fail(
                reporter,
                &format!("Input ('{actual}') needs to be valid json.\nJSON parsing error: '{e}'"),
                msg_and_args,
            );
        }
    };

    if json::equivalent(&expected_value, &actual_value) {
        return true;
    }

    let message = format!(
        "Not equal: \nexpected: {expected_value}\nactual  : {actual_value}\n\nDiff:\n{}",
        Comparison::new(&expected_value, &actual_value)
    );
    fail(reporter, &message, msg_and_args)
}

/// Reports a failure and returns false.
pub fn fail(
    reporter: &dyn TestReporter,
    failure_message: &str,
    msg_and_args: MsgAndArgs<'_>,
) -> bool {
    let mut content = vec![LabeledContent::new("Error", failure_message)];
    let message = render_message(msg_and_args);
    if let Some(message) = &message {
        content.push(LabeledContent::new("Messages", message));
    }

    tracing::debug!(
        failure = failure_message,
        messages = message.as_deref(),
        "assertion failed"
    );
    reporter.error(format_args!("\n{}", labeled_output(&content)));
    false
}

/// Asserts that `err` is `None`.
pub fn no_error(
    reporter: &dyn TestReporter,
    err: Option<&dyn Error>,
    msg_and_args: MsgAndArgs<'_>,
) -> bool {
    let Some(err) = err else {
        return true;
    };

    let mut message = format!("Received unexpected error:\n{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(message, "\ncaused by: {cause}");
        source = cause.source();
    }
    fail(reporter, &message, msg_and_args)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;

    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Collecting {
        errors: RefCell<Vec<String>>,
    }

    impl TestReporter for Collecting {
        fn error(&self, args: fmt::Arguments<'_>) {
            self.errors.borrow_mut().push(args.to_string());
        }

        fn fatal(&self, _args: &[&dyn fmt::Display]) {
            unreachable!("the engine never aborts");
        }

        fn fatal_fmt(&self, _args: fmt::Arguments<'_>) {
            unreachable!("the engine never aborts");
        }
    }

    #[derive(Debug)]
    struct Wrapped(std::io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("loading fixture")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_equal_passes_silently() {
        let t = Collecting::default();
        assert!(equal(&t, &vec![1, 2], &vec![1, 2], &[]));
        assert!(t.errors.borrow().is_empty());
    }

    #[test]
    fn test_equal_failure_message() {
        let t = Collecting::default();
        assert!(!equal(&t, &"alice", &"bob", &[&"user name"]));

        let errors = t.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Not equal:"));
        assert!(errors[0].contains("expected: \"alice\""));
        assert!(errors[0].contains("actual  : \"bob\""));
        assert!(errors[0].contains("Diff:"));
        assert!(errors[0].contains("Messages:"));
        assert!(errors[0].contains("user name"));
    }

    #[test]
    fn test_equal_type_mismatch_names_types() {
        let t = Collecting::default();
        assert!(!equal(&t, &1_i32, &1_i64, &[]));

        let errors = t.errors.borrow();
        assert!(errors[0].contains("expected: i32(1)"));
        assert!(errors[0].contains("actual  : i64(1)"));
        assert!(!errors[0].contains("Diff:"));
    }

    #[test]
    fn test_json_eq_ignores_order_and_whitespace() {
        let t = Collecting::default();
        assert!(json_eq(&t, r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#, &[]));
        assert!(json_eq(&t, r#"{ "list": [1, 2.0] }"#, r#"{"list":[1.0,2]}"#, &[]));
        assert!(t.errors.borrow().is_empty());
    }

    #[test]
    fn test_json_eq_invalid_expected() {
        let t = Collecting::default();
        assert!(!json_eq(&t, "not json", "{}", &[]));
        assert!(t.errors.borrow()[0].contains("Expected value ('not json') is not valid json."));
    }

    #[test]
    fn test_json_eq_invalid_actual() {
        let t = Collecting::default();
        assert!(!json_eq(&t, "{}", "{", &[]));
        assert!(t.errors.borrow()[0].contains("Input ('{') needs to be valid json."));
    }

    #[test]
    fn test_json_eq_mismatch() {
        let t = Collecting::default();
        assert!(!json_eq(&t, r#"{"a":1}"#, r#"{"a":"1"}"#, &[]));
        assert!(t.errors.borrow()[0].contains("Not equal:"));
    }

    #[test]
    fn test_json_eq_deeply_nested() {
        let t = Collecting::default();
        let deep = "[".repeat(200) + &"]".repeat(200);
        assert!(json_eq(&t, &deep, &deep, &[]));

        let nested = "{\"k\":".repeat(300) + "1" + &"}".repeat(300);
        let nested_float = "{\"k\":".repeat(300) + "1.0" + &"}".repeat(300);
        assert!(json_eq(&t, &nested, &nested_float, &[]));
        assert!(t.errors.borrow().is_empty());
    }

    #[test]
    fn test_json_eq_past_depth_limit() {
        let t = Collecting::default();
        let too_deep = "[".repeat(JSON_MAX_DEPTH + 1) + &"]".repeat(JSON_MAX_DEPTH + 1);
        assert!(!json_eq(&t, "[]", &too_deep, &[]));
        assert!(t.errors.borrow()[0].contains("exceeds the maximum of 10000"));
    }

    #[test]
    fn test_fail_always_reports() {
        let t = Collecting::default();
        assert!(!fail(&t, "unreachable endpoint", &[]));

        let errors = t.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Error:"));
        assert!(errors[0].contains("unreachable endpoint"));
        assert!(!errors[0].contains("Messages:"));
    }

    #[test]
    fn test_no_error() {
        let t = Collecting::default();
        assert!(no_error(&t, None, &[]));
        assert!(t.errors.borrow().is_empty());

        let err = Wrapped(std::io::Error::other("file missing"));
        assert!(!no_error(&t, Some(&err), &[]));

        let errors = t.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Received unexpected error:"));
        assert!(errors[0].contains("loading fixture"));
        assert!(errors[0].contains("caused by: file missing"));
    }
}
