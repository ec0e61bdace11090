//! Check response use case
//!
//! Runs a list of [`Assert`]s against a response and hands each outcome to a
//! [`Verifier`], so predicate failures reach the test reporter.

use apitest_domain::{Assert, RequestSpec, ResponseSpec};

use crate::ports::{TestReporter, Verifier};

/// Runs every assert in order and returns true if all of them passed.
///
/// All asserts run even after a failure, so the reporter sees every problem
/// with the response.
pub fn check_response(
    verifier: &dyn Verifier,
    reporter: &dyn TestReporter,
    asserts: &[Assert],
    response: &ResponseSpec,
    request: &RequestSpec,
) -> bool {
    let mut all_passed = true;

    for (index, assert) in asserts.iter().enumerate() {
        let outcome = assert(response, request);
        if let Err(err) = &outcome {
            tracing::debug!(
                index,
                status = response.status_code(),
                method = %request.method,
                url = %request.url,
                error = %err,
                "response assert failed"
            );
        }

        let label = format!("assert #{} on {} {}", index + 1, request.method, request.url);
        let passed = verifier.no_error(
            reporter,
            outcome.as_ref().err().map(|e| e as &dyn std::error::Error),
            &[&label],
        );
        all_passed &= passed;
    }

    all_passed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::error::Error;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use apitest_domain::{AssertError, is_client_error, is_server_error, is_success};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ports::{Comparable, MsgAndArgs, render_message};

    #[derive(Default)]
    struct Collecting {
        errors: RefCell<Vec<String>>,
    }

    impl TestReporter for Collecting {
        fn error(&self, args: fmt::Arguments<'_>) {
            self.errors.borrow_mut().push(args.to_string());
        }

        fn fatal(&self, _args: &[&dyn fmt::Display]) {
            unreachable!("check_response never aborts");
        }

        fn fatal_fmt(&self, _args: fmt::Arguments<'_>) {
            unreachable!("check_response never aborts");
        }
    }

    /// Reports `error: message` for each error it sees.
    #[derive(Default)]
    struct Minimal {
        calls: AtomicUsize,
    }

    impl Verifier for Minimal {
        fn equal(
            &self,
            _: &dyn TestReporter,
            _: &dyn Comparable,
            _: &dyn Comparable,
            _: MsgAndArgs<'_>,
        ) -> bool {
            true
        }

        fn json_eq(&self, _: &dyn TestReporter, _: &str, _: &str, _: MsgAndArgs<'_>) -> bool {
            true
        }

        fn fail(&self, _: &dyn TestReporter, _: &str, _: MsgAndArgs<'_>) -> bool {
            false
        }

        fn no_error(
            &self,
            reporter: &dyn TestReporter,
            err: Option<&dyn Error>,
            msg_and_args: MsgAndArgs<'_>,
        ) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let Some(err) = err else {
                return true;
            };
            let message = render_message(msg_and_args).unwrap_or_default();
            reporter.error(format_args!("{err}: {message}"));
            false
        }
    }

    fn request() -> RequestSpec {
        RequestSpec::get("http://localhost/orders/1").unwrap()
    }

    #[test]
    fn test_all_asserts_pass() {
        let verifier = Minimal::default();
        let reporter = Collecting::default();

        let passed = check_response(
            &verifier,
            &reporter,
            &[is_success],
            &ResponseSpec::new(204),
            &request(),
        );

        assert!(passed);
        assert!(reporter.errors.borrow().is_empty());
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_runs_every_assert_after_failure() {
        let verifier = Minimal::default();
        let reporter = Collecting::default();

        let passed = check_response(
            &verifier,
            &reporter,
            &[is_success, is_client_error, is_server_error],
            &ResponseSpec::new(404),
            &request(),
        );

        assert!(!passed);
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 3);
        let errors = reporter.errors.borrow();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            "not success. Status code=404: assert #1 on GET http://localhost/orders/1"
        );
        assert!(errors[1].starts_with("not a server error. Status code=404"));
    }

    #[test]
    fn test_custom_assert() {
        fn has_body(response: &ResponseSpec, _: &RequestSpec) -> Result<(), AssertError> {
            if response.body.is_empty() {
                return Err(AssertError::custom("response body is empty"));
            }
            Ok(())
        }

        let verifier = Minimal::default();
        let reporter = Collecting::default();
        let asserts: [Assert; 2] = [is_success, has_body];

        let passed = check_response(
            &verifier,
            &reporter,
            &asserts,
            &ResponseSpec::new(200),
            &request(),
        );
        assert!(!passed);
        assert_eq!(reporter.errors.borrow().len(), 1);
        assert!(reporter.errors.borrow()[0].starts_with("response body is empty"));

        let with_body = ResponseSpec::new(200).with_body(r#"{"id":1}"#);
        assert!(check_response(&verifier, &reporter, &asserts, &with_body, &request()));
    }
}
