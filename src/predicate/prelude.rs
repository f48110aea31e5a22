//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use expectant::predicate::prelude::*;
//!
//! assert!(all(not_blank()).check(&["a", "b"]));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Scalar predicates
pub use super::collection::{empty, not_empty};
pub use super::condition::{is_false, is_null, is_true, not_null};
pub use super::string::{blank, not_blank};
pub use super::validity::{not_valid, null_or_not_valid, null_or_valid, valid};

// Broadcast
pub use super::collection::all;

// Evaluation
pub use super::evaluate::evaluate;
