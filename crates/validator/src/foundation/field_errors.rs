//! Per-field validation messages.
//!
//! [`FieldErrors`] is the shape a schema reports on failure: field name to
//! an ordered list of human-readable messages. Fields keep the order in
//! which the schema reported them, and each field's messages keep the order
//! in which its rules ran.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Key used for failures that do not belong to a single field
/// (non-object input, cross-field coercion failures).
pub const ROOT_FIELD: &str = "_root";

/// Validation messages grouped by input field name.
///
/// Equality ignores field order; messages within a field compare in order.
///
/// Serialises transparently as a JSON object:
///
/// ```
/// use safeact_validator::foundation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.push("email", "Required");
///
/// let json = serde_json::to_string(&errors).unwrap();
/// assert_eq!(json, r#"{"email":["Required"]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the given field, creating the entry if needed.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Appends a [`ValidationError`] under `field`, using its message.
    pub fn push_error(&mut self, field: impl Into<String>, error: &ValidationError) {
        self.push(field, error.message.as_ref());
    }

    /// Messages recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if `field` has at least one message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Removes all messages for `field`, returning them.
    pub fn remove(&mut self, field: &str) -> Option<Vec<String>> {
        self.0.shift_remove(field)
    }

    /// Number of fields with messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates `(field, messages)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consumes the set, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

impl<K, M> FromIterator<(K, M)> for FieldErrors
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.push(field, message);
        }
        errors
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
