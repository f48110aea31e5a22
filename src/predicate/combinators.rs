//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates.

use crate::failure::Failure;

/// A predicate over values of type T that can explain its own failures.
///
/// `check` decides; `failure` describes why `check` returned `false`. The
/// description is only computed for values that failed.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// let p = not_blank().and(|s: &str| s.len() <= 8);
/// assert!(p.check("alice"));
/// assert!(!p.check("   "));
/// assert!(!p.check("much too long"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;

    /// Describe why `value` does not satisfy this predicate.
    fn failure(&self, _value: &T) -> Failure {
        Failure::described("value did not satisfy the predicate")
    }
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// let p = is_null().or(|v: &Option<i32>| *v == Some(0)).not();
/// assert!(p.check(&Some(5)));
/// assert!(!p.check(&None));
/// assert!(!p.check(&Some(0)));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// A failure is described by the first predicate that failed.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// A failure is described by both predicates.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }

    fn failure(&self, value: &T) -> Failure {
        if self.0.check(value) {
            self.1.failure(value)
        } else {
            self.0.failure(value)
        }
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }

    fn failure(&self, value: &T) -> Failure {
        Failure::described(format!(
            "{}; or {}",
            self.0.failure(value),
            self.1.failure(value)
        ))
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }

    fn failure(&self, _value: &T) -> Failure {
        Failure::described("value satisfied a negated predicate")
    }
}
