//! Validity predicates
//!
//! Defined purely in terms of [`Validatable::is_valid`]. An absent value is
//! neither valid nor invalid, so [`Valid`] and [`NotValid`] only apply to
//! present values; the `NullOr*` forms accept `Option` and let `None` pass.

use super::combinators::Predicate;
use crate::failure::{short_type_name, Failure};
use crate::operand::Validatable;

/// Predicate that checks a value is valid.
#[derive(Clone, Copy, Default, Debug)]
pub struct Valid;

impl<V: Validatable + ?Sized> Predicate<V> for Valid {
    #[inline]
    fn check(&self, value: &V) -> bool {
        value.is_valid()
    }

    fn failure(&self, _value: &V) -> Failure {
        Failure::described(format!("expected valid {}", short_type_name::<V>()))
    }
}

/// Create a predicate that checks a value is valid.
pub fn valid() -> Valid {
    Valid
}

/// Predicate that checks a value is not valid.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotValid;

impl<V: Validatable + ?Sized> Predicate<V> for NotValid {
    #[inline]
    fn check(&self, value: &V) -> bool {
        !value.is_valid()
    }

    fn failure(&self, _value: &V) -> Failure {
        Failure::described(format!("expected invalid {}", short_type_name::<V>()))
    }
}

/// Create a predicate that checks a value is not valid.
pub fn not_valid() -> NotValid {
    NotValid
}

/// Predicate that checks a value is absent or valid.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullOrValid;

impl<V: Validatable> Predicate<Option<V>> for NullOrValid {
    #[inline]
    fn check(&self, value: &Option<V>) -> bool {
        value.as_ref().is_none_or(Validatable::is_valid)
    }

    fn failure(&self, _value: &Option<V>) -> Failure {
        Failure::described(format!(
            "expected None or valid {}",
            short_type_name::<V>()
        ))
    }
}

/// Create a predicate that checks a value is absent or valid.
///
/// # Example
///
/// ```rust
/// use expectant::operand::Validatable;
/// use expectant::predicate::*;
///
/// struct Flag(bool);
///
/// impl Validatable for Flag {
///     fn is_valid(&self) -> bool {
///         self.0
///     }
/// }
///
/// assert!(null_or_valid().check(&None::<Flag>));
/// assert!(null_or_valid().check(&Some(Flag(true))));
/// assert!(!null_or_valid().check(&Some(Flag(false))));
/// ```
pub fn null_or_valid() -> NullOrValid {
    NullOrValid
}

/// Predicate that checks a value is absent or not valid.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullOrNotValid;

impl<V: Validatable> Predicate<Option<V>> for NullOrNotValid {
    #[inline]
    fn check(&self, value: &Option<V>) -> bool {
        value.as_ref().is_none_or(|v| !v.is_valid())
    }

    fn failure(&self, _value: &Option<V>) -> Failure {
        Failure::described(format!(
            "expected None or invalid {}",
            short_type_name::<V>()
        ))
    }
}

/// Create a predicate that checks a value is absent or not valid.
pub fn null_or_not_valid() -> NullOrNotValid {
    NullOrNotValid
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Token(&'static str);

    impl Validatable for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[test]
    fn test_valid() {
        assert!(valid().check(&Token("abc")));
        assert!(!valid().check(&Token("")));
        assert_eq!(valid().failure(&Token("")).to_string(), "expected valid Token");
    }

    #[test]
    fn test_not_valid() {
        assert!(not_valid().check(&Token("")));
        assert!(!not_valid().check(&Token("abc")));
    }

    #[test]
    fn test_null_or_valid() {
        assert!(null_or_valid().check(&None::<Token>));
        assert!(null_or_valid().check(&Some(Token("abc"))));
        assert!(!null_or_valid().check(&Some(Token(""))));
    }

    #[test]
    fn test_null_or_not_valid() {
        assert!(null_or_not_valid().check(&None::<Token>));
        assert!(null_or_not_valid().check(&Some(Token(""))));
        assert!(!null_or_not_valid().check(&Some(Token("abc"))));
        assert_eq!(
            null_or_not_valid().failure(&Some(Token("abc"))).to_string(),
            "expected None or invalid Token"
        );
    }
}
