//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`] for one failed rule,
//!   [`FieldErrors`] for a whole input grouped by field

pub mod error;
pub mod field_errors;
pub mod traits;

pub use error::ValidationError;
pub use field_errors::{FieldErrors, ROOT_FIELD};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
