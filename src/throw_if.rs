//! Throw-if checks
//!
//! The same catalog as [`expect`](crate::expect), named for the condition that
//! *fails* rather than the one that must hold: `throw_if_null(x)` raises
//! exactly when `expect_not_null(x)` would. Each function delegates to its
//! expect counterpart.
//!
//! # Example
//!
//! ```rust
//! use expectant::throw_if::*;
//! use expectant::ThrowIfError;
//!
//! fn parse_port(raw: &str) -> Result<u16, ThrowIfError> {
//!     throw_if_blank(raw)?;
//!     let port: Option<u16> = raw.trim().parse().ok();
//!     throw_if_null(&port)?;
//!     throw_if_equal(&port, &Some(0))?;
//!     Ok(port.unwrap_or_default())
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert!(parse_port(" ").is_err());
//! assert!(parse_port("http").is_err());
//! assert!(parse_port("0").is_err());
//! ```

use std::fmt::Debug;

use crate::error::ThrowIfError;
use crate::expect;
use crate::operand::{Measurable, Nullable, Textual, Validatable};
use crate::predicate::{All, Blank, Empty, IsNull, NotBlank, NotEmpty, NotNull};
use crate::predicate::{NullOrValid, Predicate, Valid};

/// Result of a throw-if check.
pub type ThrowIf = Result<(), ThrowIfError>;

/// Raise if the condition is `true`.
pub fn throw_if_true(condition: bool) -> ThrowIf {
    expect::expect_false(condition)
}

/// Raise if the condition is `false`.
pub fn throw_if_false(condition: bool) -> ThrowIf {
    expect::expect_true(condition)
}

/// Raise if the operands are equal.
pub fn throw_if_equal<T, U>(unexpected: &T, actual: &U) -> ThrowIf
where
    T: PartialEq<U> + ?Sized,
    U: Debug + ?Sized,
{
    expect::expect_not_equal(unexpected, actual)
}

/// Raise if the operands differ.
pub fn throw_if_not_equal<T, U>(expected: &T, actual: &U) -> ThrowIf
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    expect::expect_equal(expected, actual)
}

/// Raise if both references point at the same value.
pub fn throw_if_same<'a, T>(
    unexpected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> ThrowIf
where
    T: ?Sized + 'a,
{
    expect::expect_not_same(unexpected, actual)
}

/// Raise if the references point at different values.
pub fn throw_if_not_same<'a, T>(
    expected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> ThrowIf
where
    T: Debug + ?Sized + 'a,
{
    expect::expect_same(expected, actual)
}

/// Raise if the value is absent.
pub fn throw_if_null<T: Nullable + ?Sized>(value: &T) -> ThrowIf {
    expect::expect_not_null(value)
}

/// Raise if the value is present.
pub fn throw_if_not_null<T: Nullable + Debug + ?Sized>(value: &T) -> ThrowIf {
    expect::expect_null(value)
}

/// Raise if any element is absent.
pub fn throw_if_any_null<C: ?Sized>(values: &C) -> ThrowIf
where
    All<NotNull>: Predicate<C>,
{
    expect::expect_all_not_null(values)
}

/// Raise if any element is present.
pub fn throw_if_any_not_null<C: ?Sized>(values: &C) -> ThrowIf
where
    All<IsNull>: Predicate<C>,
{
    expect::expect_all_null(values)
}

/// Raise if the value is absent or empty.
pub fn throw_if_empty<T: Measurable + ?Sized>(value: &T) -> ThrowIf {
    expect::expect_not_empty(value)
}

/// Raise if the value holds any element.
pub fn throw_if_not_empty<T: Measurable + Debug + ?Sized>(value: &T) -> ThrowIf {
    expect::expect_empty(value)
}

/// Raise if any element is absent or empty.
pub fn throw_if_any_empty<C: ?Sized>(values: &C) -> ThrowIf
where
    All<NotEmpty>: Predicate<C>,
{
    expect::expect_all_not_empty(values)
}

/// Raise if any element is non-empty.
pub fn throw_if_any_not_empty<C: ?Sized>(values: &C) -> ThrowIf
where
    All<Empty>: Predicate<C>,
{
    expect::expect_all_empty(values)
}

/// Raise if the text is absent, empty or whitespace only.
pub fn throw_if_blank<T: Textual + Debug + ?Sized>(value: &T) -> ThrowIf {
    expect::expect_not_blank(value)
}

/// Raise if the text has non-whitespace content.
pub fn throw_if_not_blank<T: Textual + Debug + ?Sized>(value: &T) -> ThrowIf {
    expect::expect_blank(value)
}

/// Raise if any element is blank.
pub fn throw_if_any_blank<C: ?Sized>(values: &C) -> ThrowIf
where
    All<NotBlank>: Predicate<C>,
{
    expect::expect_all_not_blank(values)
}

/// Raise if any element is not blank.
pub fn throw_if_any_not_blank<C: ?Sized>(values: &C) -> ThrowIf
where
    All<Blank>: Predicate<C>,
{
    expect::expect_all_blank(values)
}

/// Raise if the value is invalid.
pub fn throw_if_not_valid<V: Validatable + ?Sized>(value: &V) -> ThrowIf {
    expect::expect_valid(value)
}

/// Raise if the value is valid.
pub fn throw_if_valid<V: Validatable + ?Sized>(value: &V) -> ThrowIf {
    expect::expect_not_valid(value)
}

/// Raise if the value is present and invalid. `None` passes.
pub fn throw_if_some_not_valid<V: Validatable>(value: &Option<V>) -> ThrowIf {
    expect::expect_null_or_valid(value)
}

/// Raise if the value is absent or invalid.
pub fn throw_if_null_or_not_valid<V: Validatable>(value: &Option<V>) -> ThrowIf {
    expect::expect_not_null(value)?;
    expect::expect_null_or_valid(value)
}

/// Raise if any element is invalid.
pub fn throw_if_any_not_valid<C: ?Sized>(values: &C) -> ThrowIf
where
    All<Valid>: Predicate<C>,
{
    expect::expect_all_valid(values)
}

/// Raise if any present element is invalid. `None` elements pass.
pub fn throw_if_any_some_not_valid<C: ?Sized>(values: &C) -> ThrowIf
where
    All<NullOrValid>: Predicate<C>,
{
    expect::expect_all_null_or_valid(values)
}

/// Raise if any element is absent or invalid.
pub fn throw_if_any_null_or_not_valid<C: ?Sized>(values: &C) -> ThrowIf
where
    All<NotNull>: Predicate<C>,
    All<NullOrValid>: Predicate<C>,
{
    expect::expect_all_not_null(values)?;
    expect::expect_all_null_or_valid(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flag(bool);

    impl Validatable for Flag {
        fn is_valid(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_polarity_is_inverted() {
        assert!(throw_if_true(2 > 1).is_err());
        assert!(throw_if_true(1 > 2).is_ok());
        assert!(throw_if_false(1 > 2).is_err());
        assert!(throw_if_false(2 > 1).is_ok());
    }

    #[test]
    fn test_messages_come_from_expect() {
        assert_eq!(
            throw_if_true(true).unwrap_err().to_string(),
            expect::expect_false(true).unwrap_err().to_string()
        );
        assert_eq!(
            throw_if_not_null(&Some("x")).unwrap_err().to_string(),
            "expected null, but was:<Some(\"x\")>"
        );
    }

    #[test]
    fn test_not_valid() {
        assert!(throw_if_not_valid(&Flag(false)).is_err());
        assert!(throw_if_not_valid(&Flag(true)).is_ok());
        assert!(throw_if_valid(&Flag(true)).is_err());
    }

    #[test]
    fn test_some_not_valid_lets_none_pass() {
        assert!(throw_if_some_not_valid(&None::<Flag>).is_ok());
        assert!(throw_if_some_not_valid(&Some(Flag(true))).is_ok());
        assert!(throw_if_some_not_valid(&Some(Flag(false))).is_err());
    }

    #[test]
    fn test_null_or_not_valid() {
        assert!(throw_if_null_or_not_valid(&None::<Flag>).is_err());
        assert!(throw_if_null_or_not_valid(&Some(Flag(false))).is_err());
        assert!(throw_if_null_or_not_valid(&Some(Flag(true))).is_ok());
    }

    #[test]
    fn test_any_forms() {
        assert!(throw_if_any_null(&[Some(1), None]).is_err());
        assert!(throw_if_any_empty(&["a", ""]).is_err());
        assert!(throw_if_any_blank(&Vec::<&str>::new()).is_ok());
        assert!(throw_if_any_not_valid(&[Flag(true), Flag(false)]).is_err());
        assert!(throw_if_any_some_not_valid(&[None, Some(Flag(true))]).is_ok());
        assert!(throw_if_any_null_or_not_valid(&[None, Some(Flag(true))]).is_err());
        assert!(throw_if_any_null_or_not_valid(&[Some(Flag(true))]).is_ok());
    }
}
