//! Evaluating predicates
//!
//! [`evaluate`] is the single entry point every façade uses to run a
//! predicate against a value.

use super::combinators::Predicate;
use crate::failure::Failure;

/// Evaluate a value using a predicate.
///
/// Returns `Ok(())` if the predicate is satisfied, otherwise the predicate's
/// description of the failure.
///
/// # Example
///
/// ```rust
/// use expectant::predicate::*;
///
/// assert!(evaluate("hello", not_blank()).is_ok());
///
/// let failure = evaluate("  ", not_blank()).unwrap_err();
/// assert_eq!(failure.to_string(), r#"expected non-blank text, but was:<"  ">"#);
/// ```
pub fn evaluate<T, P>(value: &T, predicate: P) -> Result<(), Failure>
where
    T: ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Ok(())
    } else {
        Err(predicate.failure(value))
    }
}
