//! The predicate core
//!
//! A fixed catalog of named predicates over values, collections and
//! [`Validatable`](crate::operand::Validatable) objects. Every predicate
//! decides true or false and, when false, describes the failure as a
//! [`Failure`](crate::failure::Failure). Nothing here raises errors; that is
//! left to the [`expect`](crate::expect), [`guard`](crate::guard) and
//! [`throw_if`](crate::throw_if) façades.
//!
//! # Example
//!
//! ```rust
//! use expectant::predicate::*;
//!
//! assert!(not_blank().check("john_doe"));
//! assert!(all(not_null()).check(&[Some(1), Some(2)]));
//! assert!(evaluate(&[Some(1), None], all(not_null())).is_err());
//! ```
//!
//! Predicates compose with `and`, `or` and `not`:
//!
//! ```rust
//! use expectant::predicate::*;
//!
//! let short_name = not_blank().and(|s: &str| s.len() <= 8);
//! assert!(evaluate("alice", short_name).is_ok());
//! ```

mod collection;
mod combinators;
mod condition;
mod equality;
mod evaluate;
mod string;
mod validity;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export condition predicates
pub use condition::{is_false, is_null, is_true, not_null, IsFalse, IsNull, IsTrue, NotNull};

// Re-export text predicates
pub use string::{blank, not_blank, Blank, NotBlank};

// Re-export collection predicates
pub use collection::{all, empty, not_empty, All, Empty, NotEmpty};

// Re-export validity predicates
pub use validity::{
    not_valid, null_or_not_valid, null_or_valid, valid, NotValid, NullOrNotValid, NullOrValid,
    Valid,
};

// Re-export two-operand checks
pub use equality::{equal, equal_text, not_equal, not_same, same};

pub use evaluate::evaluate;
