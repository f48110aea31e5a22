//! Boolean and nullness predicates

use std::fmt::Debug;

use super::combinators::Predicate;
use crate::failure::Failure;
use crate::operand::Nullable;

/// Predicate that checks a condition is `true`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsTrue;

impl Predicate<bool> for IsTrue {
    #[inline]
    fn check(&self, value: &bool) -> bool {
        *value
    }

    fn failure(&self, _value: &bool) -> Failure {
        Failure::Condition { expected: true }
    }
}

/// Create a predicate that checks a condition is `true`.
pub fn is_true() -> IsTrue {
    IsTrue
}

/// Predicate that checks a condition is `false`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsFalse;

impl Predicate<bool> for IsFalse {
    #[inline]
    fn check(&self, value: &bool) -> bool {
        !*value
    }

    fn failure(&self, _value: &bool) -> Failure {
        Failure::Condition { expected: false }
    }
}

/// Create a predicate that checks a condition is `false`.
pub fn is_false() -> IsFalse {
    IsFalse
}

/// Predicate that checks a value is absent.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl<T: Nullable + Debug + ?Sized> Predicate<T> for IsNull {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_null()
    }

    fn failure(&self, value: &T) -> Failure {
        Failure::NotNull {
            actual: format!("{:?}", value),
        }
    }
}

/// Create a predicate that checks a value is absent.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(is_null().check(&None::<i32>));
/// assert!(!is_null().check(&Some(1)));
/// ```
pub fn is_null() -> IsNull {
    IsNull
}

/// Predicate that checks a value is present.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotNull;

impl<T: Nullable + ?Sized> Predicate<T> for NotNull {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !value.is_null()
    }

    fn failure(&self, _value: &T) -> Failure {
        Failure::Null
    }
}

/// Create a predicate that checks a value is present.
pub fn not_null() -> NotNull {
    NotNull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions() {
        assert!(is_true().check(&true));
        assert!(!is_true().check(&false));
        assert!(is_false().check(&false));
        assert!(!is_false().check(&true));
        assert_eq!(
            is_false().failure(&true).to_string(),
            "expected condition to be false"
        );
    }

    #[test]
    fn test_null() {
        assert!(is_null().check(&None::<String>));
        assert!(!is_null().check(&Some("x")));
        assert_eq!(
            is_null().failure(&Some("x")).to_string(),
            "expected null, but was:<Some(\"x\")>"
        );
    }

    #[test]
    fn test_not_null() {
        assert!(not_null().check(&Some(0)));
        assert!(!not_null().check(&None::<u8>));
        assert_eq!(not_null().failure(&None::<u8>), Failure::Null);
    }
}
