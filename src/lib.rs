//! # Expectant
//!
//! Runtime checks that raise descriptive, typed errors when a condition,
//! equality, nullness, emptiness, blankness or validity expectation does not
//! hold.
//!
//! ## Layers
//!
//! - [`predicate`]: the predicate core. Decides true or false and describes
//!   failures; never raises.
//! - [`expect`]: raises [`ExpectationError`] when a predicate does not hold.
//! - [`guard`]: re-raises expectation failures as [`GuardError`], keeping the
//!   original as the cause.
//! - [`throw_if`]: the expect catalog named by the condition that fails.
//!
//! ## Quick Example
//!
//! ```rust
//! use expectant::expect::*;
//! use expectant::model::Model;
//! use expectant::operand::Validatable;
//! use expectant::{ExpectationError, MessageExt};
//!
//! struct Account {
//!     owner: String,
//!     roles: Vec<String>,
//! }
//!
//! impl Model for Account {
//!     fn validate(&self) -> Result<(), ExpectationError> {
//!         expect_not_blank(&self.owner).message("owner is required")?;
//!         expect_not_empty(&self.roles)?;
//!         expect_all_not_blank(&self.roles)
//!     }
//! }
//!
//! expectant::validatable!(Account);
//!
//! let account = Account {
//!     owner: "alice".to_string(),
//!     roles: vec!["admin".to_string()],
//! };
//! assert!(account.is_valid());
//!
//! let orphan = Account {
//!     owner: "  ".to_string(),
//!     roles: vec![],
//! };
//! assert_eq!(orphan.validate().unwrap_err().to_string(), "owner is required");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod expect;
pub mod failure;
pub mod guard;
pub mod model;
pub mod operand;
pub mod predicate;
pub mod testing;
pub mod throw_if;
#[cfg(feature = "serde")]
pub mod uri;

// Re-exports
pub use error::{ExpectationError, GuardError, MessageExt, ThrowIfError};
pub use failure::Failure;
pub use model::{Model, Validity};
pub use operand::Validatable;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ExpectationError, GuardError, MessageExt, ThrowIfError};
    pub use crate::expect::*;
    pub use crate::guard;
    pub use crate::model::{Model, Validity};
    pub use crate::operand::{Measurable, Nullable, Textual, Validatable};
    pub use crate::throw_if::*;
}
