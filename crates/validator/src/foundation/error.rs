//! Error type for a single failed rule.
//!
//! Codes and messages are `Cow<'static, str>`: built-in rules use static
//! text and only formatted messages allocate.

use std::borrow::Cow;
use std::fmt;

/// One rule failure: a stable code, the message shown to the user, and the
/// field it belongs to once a schema has attributed it.
///
/// ```
/// use safeact_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("too_short", "Password is too short").with_field("password");
/// assert_eq!(error.to_string(), "[password] too_short: Password is too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Machine-readable code, e.g. `"min_length"` or `"required"`.
    pub code: Cow<'static, str>,
    /// Message reported in field errors.
    pub message: Cow<'static, str>,
    /// Field name, when known.
    pub field: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates an error with no field attached.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Attributes the error to `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Replaces the message; the code is kept.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Missing or blank required field.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", crate::schema::REQUIRED_MESSAGE).with_field(field)
    }

    /// Input that does not look like `expected` (an email, a number, ...).
    pub fn invalid_format(
        field: impl Into<Cow<'static, str>>,
        expected: impl fmt::Display,
    ) -> Self {
        Self::new("invalid_format", format!("Invalid {expected}")).with_field(field)
    }

    /// JSON value of the wrong type.
    pub fn type_mismatch(
        field: impl Into<Cow<'static, str>>,
        expected: &'static str,
        received: &'static str,
    ) -> Self {
        Self::new(
            "type_mismatch",
            format!("Expected {expected}, received {received}"),
        )
        .with_field(field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{field}] {}: {}", self.code, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}
