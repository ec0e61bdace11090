//! Type-erased structural equality.

use std::any::{Any, type_name};
use std::fmt;

/// A value that can be compared for equality against another value of
/// unknown type.
///
/// Implemented for every `'static` type with `PartialEq + Debug`, so callers
/// pass plain references: `verifier.equal(&t, &expected, &actual, &[])`.
/// Values of different concrete types are never equal.
pub trait Comparable: fmt::Debug {
    /// Returns `self` as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compares against another value, returning false on a type mismatch.
    fn eq_dyn(&self, other: &dyn Comparable) -> bool;

    /// Returns the concrete type name, used in failure messages.
    fn type_name(&self) -> &'static str;
}

impl<T> Comparable for T
where
    T: PartialEq + fmt::Debug + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Comparable) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}
