//! Expect-style checks
//!
//! Each function evaluates one predicate from the [predicate
//! core](crate::predicate) and raises [`ExpectationError`] when it does not
//! hold. Broadcast forms (`expect_all_*`) accept slices, arrays, `Vec`,
//! `VecDeque`, `HashSet` and `BTreeSet`, and pass on empty input.
//!
//! Attach a message with [`MessageExt`](crate::MessageExt):
//!
//! ```rust
//! use expectant::expect::*;
//! use expectant::MessageExt;
//!
//! fn register(name: &str, tags: &[&str]) -> Result<(), expectant::ExpectationError> {
//!     expect_not_blank(name).message("name is required")?;
//!     expect_all_not_blank(tags)?;
//!     Ok(())
//! }
//!
//! assert!(register("alice", &["admin"]).is_ok());
//! assert_eq!(register(" ", &[]).unwrap_err().to_string(), "name is required");
//! assert_eq!(
//!     register("bob", &["ok", ""]).unwrap_err().to_string(),
//!     r#"element [1]: expected non-blank text, but was:<"">"#
//! );
//! ```

use std::error::Error as StdError;
use std::fmt::Debug;

use crate::error::ExpectationError;
use crate::failure::{short_type_name, Failure};
use crate::operand::{Measurable, Nullable, Textual, Validatable};
use crate::predicate::{self, All, Blank, Empty, IsNull, NotBlank, NotEmpty, NotNull, NotValid};
use crate::predicate::{NullOrNotValid, NullOrValid, Predicate, Valid};

/// Result of an expect-style check.
pub type Expectation = Result<(), ExpectationError>;

/// Expect an arbitrary predicate to hold for `value`.
///
/// # Example
///
/// ```rust
/// use expectant::expect::expect_that;
/// use expectant::predicate::{not_null, PredicateExt};
///
/// let positive = not_null().and(|v: &Option<i32>| v.is_some_and(|n| n > 0));
/// assert!(expect_that(&Some(3), positive).is_ok());
/// ```
pub fn expect_that<T, P>(value: &T, predicate: P) -> Expectation
where
    T: ?Sized,
    P: Predicate<T>,
{
    Ok(predicate::evaluate(value, predicate)?)
}

/// Expect a condition to be `true`.
pub fn expect_true(condition: bool) -> Expectation {
    expect_that(&condition, predicate::is_true())
}

/// Expect a condition to be `false`.
pub fn expect_false(condition: bool) -> Expectation {
    expect_that(&condition, predicate::is_false())
}

/// Expect two operands to be equal.
///
/// Null-safe: two `None`s are equal.
///
/// # Example
///
/// ```rust
/// use expectant::expect::expect_equal;
///
/// assert!(expect_equal(&None::<u8>, &None).is_ok());
/// assert_eq!(
///     expect_equal(&Some(1), &Some(2)).unwrap_err().to_string(),
///     "expected:<Some(1)> but was:<Some(2)>"
/// );
/// ```
pub fn expect_equal<T, U>(expected: &T, actual: &U) -> Expectation
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    Ok(predicate::equal(expected, actual)?)
}

/// Expect two texts to be equal, reporting a compacted difference.
pub fn expect_equal_text(expected: &str, actual: &str) -> Expectation {
    Ok(predicate::equal_text(expected, actual)?)
}

/// Expect two operands to differ.
pub fn expect_not_equal<T, U>(unexpected: &T, actual: &U) -> Expectation
where
    T: PartialEq<U> + ?Sized,
    U: Debug + ?Sized,
{
    Ok(predicate::not_equal(unexpected, actual)?)
}

/// Expect two references to point at the same value.
pub fn expect_same<'a, T>(
    expected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> Expectation
where
    T: Debug + ?Sized + 'a,
{
    Ok(predicate::same(expected, actual)?)
}

/// Expect two references to point at different values.
pub fn expect_not_same<'a, T>(
    unexpected: impl Into<Option<&'a T>>,
    actual: impl Into<Option<&'a T>>,
) -> Expectation
where
    T: ?Sized + 'a,
{
    Ok(predicate::not_same(unexpected, actual)?)
}

/// Expect a value to be absent.
pub fn expect_null<T: Nullable + Debug + ?Sized>(value: &T) -> Expectation {
    expect_that(value, IsNull)
}

/// Expect a value to be present.
pub fn expect_not_null<T: Nullable + ?Sized>(value: &T) -> Expectation {
    expect_that(value, NotNull)
}

/// Expect every element to be absent.
pub fn expect_all_null<C: ?Sized>(values: &C) -> Expectation
where
    All<IsNull>: Predicate<C>,
{
    expect_that(values, predicate::all(IsNull))
}

/// Expect every element to be present.
pub fn expect_all_not_null<C: ?Sized>(values: &C) -> Expectation
where
    All<NotNull>: Predicate<C>,
{
    expect_that(values, predicate::all(NotNull))
}

/// Expect a value to be empty. `None` counts as empty.
pub fn expect_empty<T: Measurable + Debug + ?Sized>(value: &T) -> Expectation {
    expect_that(value, Empty)
}

/// Expect a value to hold at least one element.
pub fn expect_not_empty<T: Measurable + ?Sized>(value: &T) -> Expectation {
    expect_that(value, NotEmpty)
}

/// Expect every element to be empty.
pub fn expect_all_empty<C: ?Sized>(values: &C) -> Expectation
where
    All<Empty>: Predicate<C>,
{
    expect_that(values, predicate::all(Empty))
}

/// Expect every element to be non-empty.
pub fn expect_all_not_empty<C: ?Sized>(values: &C) -> Expectation
where
    All<NotEmpty>: Predicate<C>,
{
    expect_that(values, predicate::all(NotEmpty))
}

/// Expect text to be blank. `None` counts as blank.
pub fn expect_blank<T: Textual + Debug + ?Sized>(value: &T) -> Expectation {
    expect_that(value, Blank)
}

/// Expect text to contain something other than whitespace.
pub fn expect_not_blank<T: Textual + Debug + ?Sized>(value: &T) -> Expectation {
    expect_that(value, NotBlank)
}

/// Expect every element to be blank.
pub fn expect_all_blank<C: ?Sized>(values: &C) -> Expectation
where
    All<Blank>: Predicate<C>,
{
    expect_that(values, predicate::all(Blank))
}

/// Expect every element to be non-blank.
pub fn expect_all_not_blank<C: ?Sized>(values: &C) -> Expectation
where
    All<NotBlank>: Predicate<C>,
{
    expect_that(values, predicate::all(NotBlank))
}

/// Expect a value to be valid.
pub fn expect_valid<V: Validatable + ?Sized>(value: &V) -> Expectation {
    expect_that(value, Valid)
}

/// Expect a value to be invalid.
pub fn expect_not_valid<V: Validatable + ?Sized>(value: &V) -> Expectation {
    expect_that(value, NotValid)
}

/// Expect every element to be valid.
pub fn expect_all_valid<C: ?Sized>(values: &C) -> Expectation
where
    All<Valid>: Predicate<C>,
{
    expect_that(values, predicate::all(Valid))
}

/// Expect every element to be invalid.
pub fn expect_all_not_valid<C: ?Sized>(values: &C) -> Expectation
where
    All<NotValid>: Predicate<C>,
{
    expect_that(values, predicate::all(NotValid))
}

/// Expect a value to be absent or valid.
pub fn expect_null_or_valid<V: Validatable>(value: &Option<V>) -> Expectation {
    expect_that(value, NullOrValid)
}

/// Expect a value to be absent or invalid.
pub fn expect_null_or_not_valid<V: Validatable>(value: &Option<V>) -> Expectation {
    expect_that(value, NullOrNotValid)
}

/// Expect every element to be absent or valid.
pub fn expect_all_null_or_valid<C: ?Sized>(values: &C) -> Expectation
where
    All<NullOrValid>: Predicate<C>,
{
    expect_that(values, predicate::all(NullOrValid))
}

/// Expect every element to be absent or invalid.
pub fn expect_all_null_or_not_valid<C: ?Sized>(values: &C) -> Expectation
where
    All<NullOrNotValid>: Predicate<C>,
{
    expect_that(values, predicate::all(NullOrNotValid))
}

/// Expect `action` to fail with an error of kind `K`.
///
/// Returns the raised error so it can be inspected further. Fails if the
/// action succeeds, or if it fails with a different kind; in the latter case
/// the raised error is the [`source`](StdError::source) of the failure.
///
/// # Example
///
/// ```rust
/// use expectant::expect::{expect_throws, expect_true};
/// use expectant::{guard, ExpectationError, GuardError};
///
/// let raised: GuardError = expect_throws(|| Ok(guard::is_true(false)?)).unwrap();
/// assert_eq!(raised.to_string(), "expected condition to be true");
///
/// let mismatch = expect_throws::<GuardError, _>(|| Ok(expect_true(false)?)).unwrap_err();
/// assert!(mismatch.to_string().starts_with("Unexpected error kind raised"));
/// ```
pub fn expect_throws<K, F>(action: F) -> Result<K, ExpectationError>
where
    K: StdError + 'static,
    F: FnOnce() -> Result<(), Box<dyn StdError + Send + Sync>>,
{
    let Err(raised) = action() else {
        return Err(ExpectationError::new(Failure::NothingRaised {
            expected: short_type_name::<K>(),
        }));
    };

    match raised.downcast::<K>() {
        Ok(kind) => Ok(*kind),
        Err(other) => Err(ExpectationError::new(Failure::UnexpectedKind {
            expected: short_type_name::<K>(),
            actual: other.to_string(),
        })
        .with_source(other)),
    }
}
