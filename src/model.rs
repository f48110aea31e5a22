//! Validatable models
//!
//! A [`Model`] describes its own invariants in [`Model::validate`], usually as
//! a sequence of [`expect`](crate::expect) or [`guard`](crate::guard) checks
//! joined with `?`. The [`validatable!`](crate::validatable) macro makes a
//! model [`Validatable`]: `is_valid` runs `validate` and reports the outcome
//! as a boolean, logging the failure. `dyn Model` is always `Validatable`.
//!
//! [`Model::check`] returns the outcome as a [`Validity`] so callers that care
//! about *why* a model is invalid keep the failure instead of a bare `false`.
//!
//! # Example
//!
//! ```rust
//! use expectant::expect::*;
//! use expectant::model::{Model, Validity};
//! use expectant::operand::Validatable;
//! use expectant::ExpectationError;
//!
//! struct Vehicle {
//!     plate: String,
//! }
//!
//! impl Model for Vehicle {
//!     fn validate(&self) -> Result<(), ExpectationError> {
//!         expect_not_blank(&self.plate)
//!     }
//! }
//!
//! expectant::validatable!(Vehicle);
//!
//! assert!(Vehicle { plate: "A123BC".into() }.is_valid());
//!
//! let parked = Vehicle { plate: "".into() };
//! assert!(!parked.is_valid());
//! match parked.check() {
//!     Validity::Invalid(err) => assert!(err.to_string().starts_with("expected non-blank")),
//!     Validity::Valid => unreachable!(),
//! }
//! ```

use crate::error::ExpectationError;
use crate::failure::short_type_name;
use crate::operand::Validatable;

/// Outcome of validating a model.
#[derive(Debug)]
pub enum Validity {
    /// Every invariant held.
    Valid,
    /// An invariant failed.
    Invalid(ExpectationError),
}

impl Validity {
    /// Returns `true` if the model was valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The failure, if the model was invalid.
    pub fn error(&self) -> Option<&ExpectationError> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(err) => Some(err),
        }
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> Result<(), ExpectationError> {
        match self {
            Validity::Valid => Ok(()),
            Validity::Invalid(err) => Err(err),
        }
    }
}

impl From<Result<(), ExpectationError>> for Validity {
    fn from(result: Result<(), ExpectationError>) -> Self {
        match result {
            Ok(()) => Validity::Valid,
            Err(err) => Validity::Invalid(err),
        }
    }
}

/// A value whose state can be cross-checked.
///
/// Override [`validate`](Model::validate) to check attribute values or
/// combinations of them. The default accepts everything.
pub trait Model {
    /// Check this model's invariants.
    fn validate(&self) -> Result<(), ExpectationError> {
        Ok(())
    }

    /// Run [`validate`](Model::validate) and keep the outcome.
    ///
    /// An invalid outcome is logged at `warn` level.
    fn check(&self) -> Validity {
        let validity = Validity::from(self.validate());
        if let Validity::Invalid(err) = &validity {
            let model = short_type_name::<Self>();
            tracing::warn!(model = %model, error = %err, "{} is invalid", model);
        }
        validity
    }
}

impl Validatable for dyn Model + '_ {
    fn is_valid(&self) -> bool {
        self.check().is_valid()
    }
}

impl Validatable for dyn Model + Send + Sync + '_ {
    fn is_valid(&self) -> bool {
        self.check().is_valid()
    }
}

/// Implement [`Validatable`] for one or more [`Model`] types.
///
/// The generated `is_valid` is `Model::check(self).is_valid()`.
///
/// # Example
///
/// ```rust
/// use expectant::expect::expect_true;
/// use expectant::model::Model;
/// use expectant::operand::Validatable;
/// use expectant::ExpectationError;
///
/// struct Seat(u8);
///
/// impl Model for Seat {
///     fn validate(&self) -> Result<(), ExpectationError> {
///         expect_true(self.0 > 0)
///     }
/// }
///
/// expectant::validatable!(Seat);
///
/// assert!(Seat(1).is_valid());
/// assert!(!Seat(0).is_valid());
/// ```
#[macro_export]
macro_rules! validatable {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $crate::operand::Validatable for $model {
                fn is_valid(&self) -> bool {
                    $crate::model::Model::check(self).is_valid()
                }
            }
        )+
    };
}
