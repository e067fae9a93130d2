//! Schemas: whole-input validation that yields a typed value.
//!
//! A [`Schema`] turns untrusted raw input into either the coerced, typed
//! value or a [`FieldErrors`] map describing every invalid field.

mod field;
mod object;

use serde_json::Value;

use crate::foundation::FieldErrors;

pub use field::{BooleanField, FieldSchema, NumberField, REQUIRED_MESSAGE, StringField};
pub use object::ObjectSchema;

/// Validates raw input and produces a typed value.
///
/// Implementations must be pure: the same input always yields the same
/// result, and they may be called concurrently.
pub trait Schema: Send + Sync {
    /// The typed value produced on success.
    type Output;

    /// Validates `raw`, returning the coerced value or per-field messages.
    fn safe_parse(&self, raw: &Value) -> Result<Self::Output, FieldErrors>;
}

impl<S> Schema for std::sync::Arc<S>
where
    S: Schema + ?Sized,
{
    type Output = S::Output;

    fn safe_parse(&self, raw: &Value) -> Result<Self::Output, FieldErrors> {
        (**self).safe_parse(raw)
    }
}
