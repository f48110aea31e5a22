//! Equality and identity checks
//!
//! These take two operands, so they are plain functions rather than
//! [`Predicate`](super::Predicate) values. Each returns the [`Failure`] it
//! observed.
//!
//! Equality is structural (`PartialEq`) and null-safe: two `None`s are equal.
//! Identity compares addresses and never looks at the values.

use std::fmt::Debug;

use crate::failure::{Failure, Operand};

/// Check that two operands are equal.
///
/// When both operands render identically but compare unequal, the failure
/// carries their type names so the message tells them apart.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::equal;
///
/// assert!(equal(&1, &1).is_ok());
/// assert!(equal(&None::<i32>, &None).is_ok());
/// assert_eq!(
///     equal(&1, &2).unwrap_err().to_string(),
///     "expected:<1> but was:<2>"
/// );
/// ```
pub fn equal<T, U>(expected: &T, actual: &U) -> Result<(), Failure>
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::NotEqual {
            expected: Operand::of(expected),
            actual: Operand::of(actual),
        })
    }
}

/// Check that two texts are equal, reporting a compacted difference.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::equal_text;
///
/// assert_eq!(
///     equal_text("the cat sat", "the hat sat").unwrap_err().to_string(),
///     "expected:<the [c]at sat> but was:<the [h]at sat>"
/// );
/// ```
pub fn equal_text(expected: &str, actual: &str) -> Result<(), Failure> {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::TextMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Check that two operands differ.
pub fn not_equal<T, U>(unexpected: &T, actual: &U) -> Result<(), Failure>
where
    T: PartialEq<U> + ?Sized,
    U: Debug + ?Sized,
{
    if unexpected == actual {
        Err(Failure::Equal {
            actual: format!("{:?}", actual),
        })
    } else {
        Ok(())
    }
}

/// Check that two references point at the same value.
///
/// Accepts `&T` or `Option<&T>`; two `None`s count as the same.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::same;
///
/// let a = String::from("x");
/// let b = a.clone();
/// assert!(same(&a, &a).is_ok());
/// assert!(same(&a, &b).is_err());
/// assert!(same(None::<&String>, None).is_ok());
/// ```
pub fn same<'a, T>(
    expected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> Result<(), Failure>
where
    T: Debug + ?Sized + 'a,
{
    let (expected, actual) = (expected.into(), actual.into());
    if identical(expected, actual) {
        Ok(())
    } else {
        Err(Failure::NotSame {
            expected: render(expected),
            actual: render(actual),
        })
    }
}

/// Check that two references point at different values.
pub fn not_same<'a, T>(
    unexpected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> Result<(), Failure>
where
    T: ?Sized + 'a,
{
    if identical(unexpected.into(), actual.into()) {
        Err(Failure::Same)
    } else {
        Ok(())
    }
}

fn identical<T: ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        _ => false,
    }
}

fn render<T: Debug + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "None".to_string(),
    }
}
