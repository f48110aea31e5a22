//! Text predicates
//!
//! Blankness follows [`Textual`]: zero-length and whitespace-only text is
//! blank, and so is an absent value.

use std::fmt::Debug;

use super::combinators::Predicate;
use crate::failure::Failure;
use crate::operand::Textual;

/// Predicate that checks text is blank.
#[derive(Clone, Copy, Default, Debug)]
pub struct Blank;

impl<T: Textual + Debug + ?Sized> Predicate<T> for Blank {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_blank()
    }

    fn failure(&self, value: &T) -> Failure {
        Failure::described(format!("expected blank text, but was:<{:?}>", value))
    }
}

/// Create a predicate that checks text is blank.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(blank().check(""));
/// assert!(blank().check(" \t\n"));
/// assert!(!blank().check("x"));
/// ```
pub fn blank() -> Blank {
    Blank
}

/// Predicate that checks text is not blank.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl<T: Textual + Debug + ?Sized> Predicate<T> for NotBlank {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !value.is_blank()
    }

    fn failure(&self, value: &T) -> Failure {
        Failure::described(format!("expected non-blank text, but was:<{:?}>", value))
    }
}

/// Create a predicate that checks text is not blank.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(not_blank().check("value"));
/// assert!(!not_blank().check("   "));
/// assert!(!not_blank().check(&None::<String>));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}
