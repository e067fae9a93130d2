//! Prelude module for convenient imports.
//!
//! ```
//! use safeact_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//! ```

pub use crate::combinators::{And, WithMessage, and, with_message};
pub use crate::foundation::{FieldErrors, ROOT_FIELD, Validate, ValidateExt, ValidationError};
pub use crate::schema::{BooleanField, FieldSchema, NumberField, ObjectSchema, Schema, StringField};
pub use crate::validators::*;
