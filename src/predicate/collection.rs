//! Collection predicates
//!
//! This module provides emptiness predicates and the [`All`] broadcast, which
//! lifts any element predicate to sequences and sets.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;

use super::combinators::Predicate;
use crate::failure::Failure;
use crate::operand::Measurable;

/// Predicate that checks if a value is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct Empty;

impl<T: Measurable + Debug + ?Sized> Predicate<T> for Empty {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_empty()
    }

    fn failure(&self, value: &T) -> Failure {
        Failure::described(format!("expected empty value, but was:<{:?}>", value))
    }
}

/// Create a predicate that checks if a value is empty.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(empty().check(&Vec::<i32>::new()));
/// assert!(empty().check(&None::<String>));
/// assert!(!empty().check(&vec![1, 2, 3]));
/// ```
pub fn empty() -> Empty {
    Empty
}

/// Predicate that checks if a value is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl<T: Measurable + ?Sized> Predicate<T> for NotEmpty {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !value.is_empty()
    }

    fn failure(&self, _value: &T) -> Failure {
        Failure::described("expected non-empty value")
    }
}

/// Create a predicate that checks if a value is not empty.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(not_empty().check(&vec![1, 2, 3]));
/// assert!(not_empty().check("text"));
/// assert!(!not_empty().check(&Vec::<i32>::new()));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if all elements satisfy a predicate.
///
/// An empty collection satisfies every broadcast. A failure names the first
/// offending element.
#[derive(Clone, Copy, Debug)]
pub struct All<P>(pub P);

impl<P> All<P> {
    fn first_failure<'a, T: 'a>(&self, items: impl IntoIterator<Item = &'a T>) -> Failure
    where
        P: Predicate<T>,
    {
        items
            .into_iter()
            .enumerate()
            .find(|(_, item)| !self.0.check(item))
            .map(|(index, item)| Failure::Element {
                index,
                failure: Box::new(self.0.failure(item)),
            })
            .unwrap_or_else(|| Failure::described("every element satisfied the predicate"))
    }
}

macro_rules! broadcast {
    ($($container:ty $(, $extra:ident)*);* $(;)?) => {
        $(
            impl<T, P: Predicate<T> $(, $extra)*> Predicate<$container> for All<P> {
                #[inline]
                fn check(&self, value: &$container) -> bool {
                    value.iter().all(|item| self.0.check(item))
                }

                fn failure(&self, value: &$container) -> Failure {
                    self.first_failure(value.iter())
                }
            }
        )*
    };
}

broadcast! {
    [T];
    Vec<T>;
    VecDeque<T>;
    HashSet<T, S>, S;
    BTreeSet<T>;
}

impl<T, P: Predicate<T>, const N: usize> Predicate<[T; N]> for All<P> {
    #[inline]
    fn check(&self, value: &[T; N]) -> bool {
        value.iter().all(|item| self.0.check(item))
    }

    fn failure(&self, value: &[T; N]) -> Failure {
        self.first_failure(value.iter())
    }
}

/// Create a predicate that checks if all elements satisfy a condition.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(all(not_null()).check(&vec![Some(1), Some(2)]));
/// assert!(!all(not_null()).check(&vec![Some(1), None]));
/// assert!(all(not_null()).check(&Vec::<Option<i32>>::new()));
/// ```
pub fn all<P>(predicate: P) -> All<P> {
    All(predicate)
}
