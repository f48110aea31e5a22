//! Testing helpers
//!
//! Assertion macros for code that returns the results of expect, guard and
//! throw-if checks.
//!
//! # Examples
//!
//! ```rust
//! use expectant::expect::{expect_equal, expect_not_blank};
//! use expectant::{assert_expect_err, assert_expect_ok};
//!
//! assert_expect_ok!(expect_not_blank("value"));
//! assert_expect_err!(expect_not_blank(""));
//! assert_expect_err!(expect_equal(&1, &2), "expected:<1> but was:<2>");
//! ```

/// Assert that a check passed.
///
/// Panics with the failure's message if the check failed.
///
/// # Example
///
/// ```rust
/// use expectant::{assert_expect_ok, guard};
///
/// assert_expect_ok!(guard::is_true(1 < 2));
/// ```
#[macro_export]
macro_rules! assert_expect_ok {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(e) => {
                panic!("Expected check to pass, but it failed: {}", e);
            }
        }
    };
}

/// Assert that a check failed, optionally with a specific message.
///
/// # Example
///
/// ```rust
/// use expectant::{assert_expect_err, throw_if};
///
/// assert_expect_err!(throw_if::throw_if_null(&None::<u8>));
/// assert_expect_err!(
///     throw_if::throw_if_true(true),
///     "expected condition to be false"
/// );
/// ```
#[macro_export]
macro_rules! assert_expect_err {
    ($result:expr) => {
        match $result {
            Err(_) => {}
            Ok(v) => {
                panic!("Expected check to fail, but it passed: {:?}", v);
            }
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Err(e) => {
                assert_eq!(e.to_string(), $message);
            }
            Ok(v) => {
                panic!(
                    "Expected check to fail with {:?}, but it passed: {:?}",
                    $message, v
                );
            }
        }
    };
}
