//! MESSAGE combinator - custom error messages

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// The original error code is kept, so callers can still
/// branch on `code` while users see the custom text.
///
/// ```
/// use safeact_validator::combinators::WithMessage;
/// use safeact_validator::foundation::Validate;
/// use safeact_validator::validators::not_empty;
///
/// let validator = WithMessage::new(not_empty(), "Required");
/// let err = validator.validate("").unwrap_err();
/// assert_eq!(err.message, "Required");
/// assert_eq!(err.code, "not_empty");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message.clone()))
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
