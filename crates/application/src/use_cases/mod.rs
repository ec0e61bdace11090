//! Use cases built on the verification ports.

mod check_response;

pub use check_response::check_response;
