//! Error kinds raised by failed checks
//!
//! - [`ExpectationError`]: raised by the expect-style checks and by
//!   [`throw_if`](crate::throw_if) (see [`ThrowIfError`]).
//! - [`GuardError`]: raised by [`guard`](crate::guard); always carries the
//!   underlying [`ExpectationError`] as its source.
//!
//! Messages are attached after the fact with [`MessageExt`], so a check has a
//! single signature whether or not the caller has something to say.
//!
//! # Examples
//!
//! ```
//! use expectant::expect::expect_equal;
//! use expectant::MessageExt;
//!
//! let err = expect_equal(&"alice", &"bob").message("wrong owner").unwrap_err();
//! assert_eq!(err.to_string(), r#"wrong owner expected:<"alice"> but was:<"bob">"#);
//! ```
//!
//! ```
//! use expectant::guard;
//! use expectant::MessageExt;
//!
//! let err = guard::not_blank("   ").message("name is required").unwrap_err();
//! assert_eq!(err.to_string(), "name is required");
//! assert!(err.cause().to_string().starts_with("expected non-blank text"));
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::failure::Failure;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A failed expectation.
///
/// Carries the [`Failure`] that was observed, an optional caller message, and,
/// for [`expect_throws`](crate::expect::expect_throws) mismatches, the error
/// that was raised instead.
#[derive(Debug)]
pub struct ExpectationError {
    failure: Failure,
    message: Option<String>,
    source: Option<BoxError>,
}

impl ExpectationError {
    /// Create an error from a failure, without a caller message.
    pub fn new(failure: Failure) -> Self {
        ExpectationError {
            failure,
            message: None,
            source: None,
        }
    }

    /// Attach a caller message.
    ///
    /// An empty message is treated as no message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.is_empty()).then_some(message);
        self
    }

    /// Attach the error that caused this one.
    pub fn with_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }

    /// What the check observed.
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// The caller message, if one was attached.
    pub fn caller_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<Failure> for ExpectationError {
    fn from(failure: Failure) -> Self {
        ExpectationError::new(failure)
    }
}

impl fmt::Display for ExpectationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.failure.render(self.message.as_deref(), f)
    }
}

impl StdError for ExpectationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

/// Error raised by the throw-if checks.
///
/// Throw-if differs from expect only in how checks are named, so both raise
/// the same error.
pub type ThrowIfError = ExpectationError;

/// A failed guard.
///
/// Wraps the [`ExpectationError`] produced by the matching expect-style check.
/// Without a caller message it displays exactly like that cause; with one, the
/// message replaces it.
#[derive(Debug)]
pub struct GuardError {
    cause: ExpectationError,
    message: Option<String>,
}

impl GuardError {
    /// Wrap an expectation failure.
    pub fn new(cause: ExpectationError) -> Self {
        GuardError {
            cause,
            message: None,
        }
    }

    /// Override the displayed message.
    ///
    /// An empty message is treated as no message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.is_empty()).then_some(message);
        self
    }

    /// The expectation failure this guard wraps.
    pub fn cause(&self) -> &ExpectationError {
        &self.cause
    }

    /// Consume the guard error and return its cause.
    pub fn into_cause(self) -> ExpectationError {
        self.cause
    }
}

impl From<ExpectationError> for GuardError {
    fn from(cause: ExpectationError) -> Self {
        GuardError::new(cause)
    }
}

/// Unwraps a guard failure to its cause, so guards compose with `?` in code
/// returning [`ExpectationError`]. The guard's override message is dropped.
impl From<GuardError> for ExpectationError {
    fn from(guard: GuardError) -> Self {
        guard.into_cause()
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => fmt::Display::fmt(&self.cause, f),
        }
    }
}

impl StdError for GuardError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.cause)
    }
}

/// Attach caller messages to the result of a check.
///
/// Implemented for `Result<T, ExpectationError>` and `Result<T, GuardError>`.
/// The message is only materialized when the check failed.
pub trait MessageExt: Sized {
    /// Attach a message to a failed check.
    fn message(self, message: impl Into<String>) -> Self;

    /// Attach a lazily built message to a failed check.
    fn with_message<F, M>(self, f: F) -> Self
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T> MessageExt for Result<T, ExpectationError> {
    fn message(self, message: impl Into<String>) -> Self {
        self.map_err(|e| e.message(message))
    }

    fn with_message<F, M>(self, f: F) -> Self
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|e| e.message(f()))
    }
}

impl<T> MessageExt for Result<T, GuardError> {
    fn message(self, message: impl Into<String>) -> Self {
        self.map_err(|e| e.message(message))
    }

    fn with_message<F, M>(self, f: F) -> Self
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|e| e.message(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::Operand;

    fn not_equal() -> ExpectationError {
        ExpectationError::new(Failure::NotEqual {
            expected: Operand::of(&1),
            actual: Operand::of(&2),
        })
    }

    #[test]
    fn test_expectation_fallback_message() {
        assert_eq!(not_equal().to_string(), "expected:<1> but was:<2>");
    }

    #[test]
    fn test_expectation_message_is_prefixed_for_operands() {
        let err = not_equal().message("ids differ");
        assert_eq!(err.to_string(), "ids differ expected:<1> but was:<2>");
        assert_eq!(err.caller_message(), Some("ids differ"));
    }

    #[test]
    fn test_expectation_message_replaces_condition() {
        let err = ExpectationError::new(Failure::Condition { expected: true }).message("must hold");
        assert_eq!(err.to_string(), "must hold");
    }

    #[test]
    fn test_equal_failure_message_shape() {
        let failure = Failure::Equal {
            actual: "7".to_string(),
        };
        assert_eq!(
            ExpectationError::new(failure.clone()).to_string(),
            "Values should be different. Actual: 7"
        );
        assert_eq!(
            ExpectationError::new(failure).message("dup").to_string(),
            "dup. Actual: 7"
        );
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let err = not_equal().message("");
        assert_eq!(err.caller_message(), None);
        assert_eq!(err.to_string(), "expected:<1> but was:<2>");
    }

    #[test]
    fn test_guard_without_message_matches_cause() {
        let guard = GuardError::new(not_equal());
        assert_eq!(guard.to_string(), not_equal().to_string());
        assert!(guard.source().is_some());
    }

    #[test]
    fn test_guard_message_overrides() {
        let guard = GuardError::new(not_equal()).message("bad input");
        assert_eq!(guard.to_string(), "bad input");
        assert_eq!(guard.cause().to_string(), "expected:<1> but was:<2>");
    }

    #[test]
    fn test_message_ext_is_lazy() {
        let ok: Result<(), ExpectationError> = Ok(());
        let result = ok.with_message(|| -> String { panic!("must not be built") });
        assert!(result.is_ok());
    }

    #[test]
    fn test_source_chain() {
        let inner = GuardError::new(not_equal());
        let err = ExpectationError::new(Failure::described("outer")).with_source(Box::new(inner));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("expected:<1> but was:<2>"));
    }

    #[test]
    fn test_guard_converts_back_to_cause() {
        fn check() -> Result<(), ExpectationError> {
            let guarded: Result<(), GuardError> = Err(GuardError::new(not_equal()).message("bad input"));
            guarded?;
            Ok(())
        }

        let err = check().unwrap_err();
        assert_eq!(err.failure(), not_equal().failure());
        assert_eq!(err.to_string(), "expected:<1> but was:<2>");
    }
}
