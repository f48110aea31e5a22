//! Guard-style checks
//!
//! Every guard runs the matching [`expect`](crate::expect) check and re-raises
//! its failure as a [`GuardError`]. The expectation failure stays available as
//! the guard's [`cause`](GuardError::cause); a caller message attached with
//! [`MessageExt`](crate::MessageExt) replaces the displayed text.
//!
//! # Example
//!
//! ```rust
//! use expectant::{guard, GuardError, MessageExt};
//!
//! fn transfer(amount: i64, from: &str, to: &str) -> Result<(), GuardError> {
//!     guard::is_true(amount > 0).message("amount must be positive")?;
//!     guard::not_blank(from)?;
//!     guard::not_equal(&from, &to).message("cannot transfer to the same account")?;
//!     Ok(())
//! }
//!
//! assert!(transfer(10, "a", "b").is_ok());
//! assert_eq!(transfer(0, "a", "b").unwrap_err().to_string(), "amount must be positive");
//!
//! let err = transfer(10, "a", "a").unwrap_err();
//! assert_eq!(err.to_string(), "cannot transfer to the same account");
//! assert_eq!(err.cause().to_string(), r#"Values should be different. Actual: "a""#);
//! ```

use std::fmt::Debug;

use crate::error::{ExpectationError, GuardError};
use crate::expect;
use crate::operand::{Measurable, Nullable, Textual, Validatable};
use crate::predicate::{All, Blank, Empty, IsNull, NotBlank, NotEmpty, NotNull, NotValid};
use crate::predicate::{NullOrNotValid, NullOrValid, Predicate, Valid};

/// Result of a guard-style check.
pub type Guarded = Result<(), GuardError>;

fn rethrow(result: Result<(), ExpectationError>) -> Guarded {
    result.map_err(|cause| {
        tracing::debug!(failure = %cause, "guard failed");
        GuardError::new(cause)
    })
}

/// Guard an arbitrary predicate.
pub fn that<T, P>(value: &T, predicate: P) -> Guarded
where
    T: ?Sized,
    P: Predicate<T>,
{
    rethrow(expect::expect_that(value, predicate))
}

/// Guard that a condition is `true`.
pub fn is_true(condition: bool) -> Guarded {
    rethrow(expect::expect_true(condition))
}

/// Guard that a condition is `false`.
pub fn is_false(condition: bool) -> Guarded {
    rethrow(expect::expect_false(condition))
}

/// Guard that two operands are equal.
pub fn equal<T, U>(expected: &T, actual: &U) -> Guarded
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    rethrow(expect::expect_equal(expected, actual))
}

/// Guard that two texts are equal.
pub fn equal_text(expected: &str, actual: &str) -> Guarded {
    rethrow(expect::expect_equal_text(expected, actual))
}

/// Guard that two operands differ.
pub fn not_equal<T, U>(unexpected: &T, actual: &U) -> Guarded
where
    T: PartialEq<U> + ?Sized,
    U: Debug + ?Sized,
{
    rethrow(expect::expect_not_equal(unexpected, actual))
}

/// Guard that two references point at the same value.
pub fn same<'a, T>(expected: impl Into<Option<&'a T>>, actual: impl Into<Option<&'a T>>) -> Guarded
where
    T: Debug + ?Sized + 'a,
{
    rethrow(expect::expect_same(expected, actual))
}

/// Guard that two references point at different values.
pub fn not_same<'a, T>(
    unexpected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> Guarded
where
    T: ?Sized + 'a,
{
    rethrow(expect::expect_not_same(unexpected, actual))
}

/// Guard that a value is absent.
pub fn is_null<T: Nullable + Debug + ?Sized>(value: &T) -> Guarded {
    rethrow(expect::expect_null(value))
}

/// Guard that a value is present.
pub fn not_null<T: Nullable + ?Sized>(value: &T) -> Guarded {
    rethrow(expect::expect_not_null(value))
}

/// Guard that every element is absent.
pub fn all_null<C: ?Sized>(values: &C) -> Guarded
where
    All<IsNull>: Predicate<C>,
{
    rethrow(expect::expect_all_null(values))
}

/// Guard that every element is present.
pub fn all_not_null<C: ?Sized>(values: &C) -> Guarded
where
    All<NotNull>: Predicate<C>,
{
    rethrow(expect::expect_all_not_null(values))
}

/// Guard that a value is empty.
pub fn empty<T: Measurable + Debug + ?Sized>(value: &T) -> Guarded {
    rethrow(expect::expect_empty(value))
}

/// Guard that a value is not empty.
pub fn not_empty<T: Measurable + ?Sized>(value: &T) -> Guarded {
    rethrow(expect::expect_not_empty(value))
}

/// Guard that every element is empty.
pub fn all_empty<C: ?Sized>(values: &C) -> Guarded
where
    All<Empty>: Predicate<C>,
{
    rethrow(expect::expect_all_empty(values))
}

/// Guard that every element is non-empty.
pub fn all_not_empty<C: ?Sized>(values: &C) -> Guarded
where
    All<NotEmpty>: Predicate<C>,
{
    rethrow(expect::expect_all_not_empty(values))
}

/// Guard that text is blank.
pub fn blank<T: Textual + Debug + ?Sized>(value: &T) -> Guarded {
    rethrow(expect::expect_blank(value))
}

/// Guard that text is not blank.
pub fn not_blank<T: Textual + Debug + ?Sized>(value: &T) -> Guarded {
    rethrow(expect::expect_not_blank(value))
}

/// Guard that every element is blank.
pub fn all_blank<C: ?Sized>(values: &C) -> Guarded
where
    All<Blank>: Predicate<C>,
{
    rethrow(expect::expect_all_blank(values))
}

/// Guard that every element is non-blank.
pub fn all_not_blank<C: ?Sized>(values: &C) -> Guarded
where
    All<NotBlank>: Predicate<C>,
{
    rethrow(expect::expect_all_not_blank(values))
}

/// Guard that a value is valid.
pub fn valid<V: Validatable + ?Sized>(value: &V) -> Guarded {
    rethrow(expect::expect_valid(value))
}

/// Guard that a value is invalid.
pub fn not_valid<V: Validatable + ?Sized>(value: &V) -> Guarded {
    rethrow(expect::expect_not_valid(value))
}

/// Guard that every element is valid.
pub fn all_valid<C: ?Sized>(values: &C) -> Guarded
where
    All<Valid>: Predicate<C>,
{
    rethrow(expect::expect_all_valid(values))
}

/// Guard that every element is invalid.
pub fn all_not_valid<C: ?Sized>(values: &C) -> Guarded
where
    All<NotValid>: Predicate<C>,
{
    rethrow(expect::expect_all_not_valid(values))
}

/// Guard that a value is absent or valid.
pub fn null_or_valid<V: Validatable>(value: &Option<V>) -> Guarded {
    rethrow(expect::expect_null_or_valid(value))
}

/// Guard that a value is absent or invalid.
pub fn null_or_not_valid<V: Validatable>(value: &Option<V>) -> Guarded {
    rethrow(expect::expect_null_or_not_valid(value))
}

/// Guard that every element is absent or valid.
pub fn all_null_or_valid<C: ?Sized>(values: &C) -> Guarded
where
    All<NullOrValid>: Predicate<C>,
{
    rethrow(expect::expect_all_null_or_valid(values))
}

/// Guard that every element is absent or invalid.
pub fn all_null_or_not_valid<C: ?Sized>(values: &C) -> Guarded
where
    All<NullOrNotValid>: Predicate<C>,
{
    rethrow(expect::expect_all_null_or_not_valid(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageExt;
    use std::error::Error as StdError;

    #[test]
    fn test_guard_passes_through_success() {
        assert!(is_true(true).is_ok());
        assert!(equal(&1, &1).is_ok());
        assert!(all_not_null(&[Some(1)]).is_ok());
        assert!(all_null(&Vec::<Option<u8>>::new()).is_ok());
    }

    #[test]
    fn test_guard_message_matches_expect_without_override() {
        let guard = equal(&"a", &"b").unwrap_err();
        let expected = expect::expect_equal(&"a", &"b").unwrap_err();
        assert_eq!(guard.to_string(), expected.to_string());
        assert_eq!(guard.cause().failure(), expected.failure());
    }

    #[test]
    fn test_guard_cause_is_source() {
        let guard = not_blank("").unwrap_err();
        let source = guard.source().expect("guard always has a cause");
        assert_eq!(source.to_string(), guard.cause().to_string());
    }

    #[test]
    fn test_guard_message_override() {
        let guard = not_empty(&Vec::<u8>::new())
            .message("payload required")
            .unwrap_err();
        assert_eq!(guard.to_string(), "payload required");
        assert_eq!(guard.cause().to_string(), "expected non-empty value");
    }

    #[test]
    fn test_guard_lazy_message() {
        let id = 42;
        let guard = is_null(&Some(id))
            .with_message(|| format!("record {} already exists", id))
            .unwrap_err();
        assert_eq!(guard.to_string(), "record 42 already exists");
        assert_eq!(guard.cause().to_string(), "expected null, but was:<Some(42)>");
    }

    #[test]
    fn test_guard_identity() {
        let a = 1;
        let b = 1;
        assert!(same(&a, &a).is_ok());
        assert!(same(&a, &b).is_err());
        assert!(not_same(&a, &a).is_err());
    }
}
