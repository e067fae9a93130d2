//! Field-level schema builders.
//!
//! Each builder describes one JSON field: its expected type, whether it may
//! be missing, and the ordered list of rules applied to its value.

use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

type StrRule = Box<dyn Validate<Input = str> + Send + Sync>;
type NumRule = Box<dyn Validate<Input = f64> + Send + Sync>;

/// Message reported for a missing required field.
pub const REQUIRED_MESSAGE: &str = "Required";

// ============================================================================
// FIELD SCHEMA
// ============================================================================

/// Type-erased description of one object field.
///
/// Built from [`StringField`], [`NumberField`] or [`BooleanField`].
pub struct FieldSchema {
    kind: FieldKind,
    optional: bool,
    blank_is_missing: bool,
}

enum FieldKind {
    String(Vec<StrRule>),
    Number(Vec<NumRule>),
    Boolean,
}

impl FieldKind {
    fn name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean => "boolean",
        }
    }
}

pub(super) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FieldSchema {
    /// Checks `value` (the field's raw value, `None` when absent) and
    /// returns every failure in rule order. An empty vector means the field
    /// passed.
    pub fn check(&self, name: &str, value: Option<&Value>) -> Vec<ValidationError> {
        let value = match value {
            None | Some(Value::Null) => {
                return self.missing(name);
            }
            Some(Value::String(s)) if s.is_empty() && self.blank_is_missing => {
                return self.missing(name);
            }
            Some(value) => value,
        };

        match (&self.kind, value) {
            (FieldKind::String(rules), Value::String(s)) => rules
                .iter()
                .filter_map(|rule| rule.validate(s.as_str()).err())
                .map(|err| err.with_field(name.to_owned()))
                .collect(),
            (FieldKind::Number(rules), Value::Number(n)) => {
                let Some(n) = n.as_f64() else {
                    return vec![ValidationError::invalid_format(name.to_owned(), "number")];
                };
                rules
                    .iter()
                    .filter_map(|rule| rule.validate(&n).err())
                    .map(|err| err.with_field(name.to_owned()))
                    .collect()
            }
            (FieldKind::Boolean, Value::Bool(_)) => Vec::new(),
            (kind, other) => vec![ValidationError::type_mismatch(
                name.to_owned(),
                kind.name(),
                json_type_name(other),
            )],
        }
    }

    fn missing(&self, name: &str) -> Vec<ValidationError> {
        if self.optional {
            Vec::new()
        } else {
            vec![ValidationError::required(name.to_owned())]
        }
    }

    /// Returns `true` if the field may be absent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Number of value rules attached to the field.
    pub fn rule_count(&self) -> usize {
        match &self.kind {
            FieldKind::String(rules) => rules.len(),
            FieldKind::Number(rules) => rules.len(),
            FieldKind::Boolean => 0,
        }
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("kind", &self.kind.name())
            .field("optional", &self.optional)
            .field("rules", &self.rule_count())
            .finish()
    }
}

// ============================================================================
// STRING FIELD
// ============================================================================

/// Builder for a string field.
///
/// ```
/// use safeact_validator::schema::StringField;
/// use safeact_validator::validators::email;
/// use safeact_validator::foundation::ValidateExt;
///
/// let field = StringField::new()
///     .required()
///     .rule(email().with_message("Invalid email"));
/// ```
#[derive(Default)]
pub struct StringField {
    rules: Vec<StrRule>,
    optional: bool,
    blank_is_missing: bool,
}

impl StringField {
    /// Creates a string field with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats the empty string as missing, so `""` reports only
    /// [`REQUIRED_MESSAGE`] and skips the remaining rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.blank_is_missing = true;
        self
    }

    /// Allows the field to be absent or `null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Appends a rule. Rules run in the order they were added.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(validator));
        self
    }
}

impl From<StringField> for FieldSchema {
    fn from(field: StringField) -> Self {
        Self {
            kind: FieldKind::String(field.rules),
            optional: field.optional,
            blank_is_missing: field.blank_is_missing,
        }
    }
}

// ============================================================================
// NUMBER FIELD
// ============================================================================

/// Builder for a numeric field. Values are checked as `f64`.
#[derive(Default)]
pub struct NumberField {
    rules: Vec<NumRule>,
    optional: bool,
}

impl NumberField {
    /// Creates a number field with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows the field to be absent or `null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Appends a rule. Rules run in the order they were added.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = f64> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(validator));
        self
    }
}

impl From<NumberField> for FieldSchema {
    fn from(field: NumberField) -> Self {
        Self {
            kind: FieldKind::Number(field.rules),
            optional: field.optional,
            blank_is_missing: false,
        }
    }
}

// ============================================================================
// BOOLEAN FIELD
// ============================================================================

/// Builder for a boolean field.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanField {
    optional: bool,
}

impl BooleanField {
    /// Creates a boolean field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows the field to be absent or `null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl From<BooleanField> for FieldSchema {
    fn from(field: BooleanField) -> Self {
        Self {
            kind: FieldKind::Boolean,
            optional: field.optional,
            blank_is_missing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{email, min, min_length};

    fn messages(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_ref()).collect()
    }

    #[test]
    fn missing_required_field_reports_required() {
        let field: FieldSchema = StringField::new().into();
        assert_eq!(messages(&field.check("email", None)), vec!["Required"]);
        assert_eq!(
            messages(&field.check("email", Some(&json!(null)))),
            vec!["Required"]
        );
    }

    #[test]
    fn optional_field_may_be_missing() {
        let field: FieldSchema = StringField::new().optional().rule(min_length(3)).into();
        assert!(field.check("nickname", None).is_empty());
        assert!(field.is_optional());
    }

    #[test]
    fn blank_string_counts_as_missing_only_when_required() {
        let required: FieldSchema = StringField::new()
            .required()
            .rule(email().with_message("Invalid email"))
            .into();
        assert_eq!(
            messages(&required.check("email", Some(&json!("")))),
            vec!["Required"]
        );

        let lenient: FieldSchema = StringField::new()
            .rule(email().with_message("Invalid email"))
            .into();
        assert_eq!(
            messages(&lenient.check("email", Some(&json!("")))),
            vec!["Invalid email"]
        );
    }

    #[test]
    fn all_rules_run_in_declaration_order() {
        let field: FieldSchema = StringField::new()
            .rule(min_length(8).with_message("Too short"))
            .rule(email().with_message("Invalid email"))
            .into();
        let errors = field.check("email", Some(&json!("abc")));
        assert_eq!(messages(&errors), vec!["Too short", "Invalid email"]);
        assert!(errors.iter().all(|e| e.field.as_deref() == Some("email")));
    }

    #[test]
    fn wrong_type_reports_mismatch() {
        let field: FieldSchema = NumberField::new().rule(min(0.0)).into();
        assert_eq!(
            messages(&field.check("age", Some(&json!("ten")))),
            vec!["Expected number, received string"]
        );
    }

    #[test]
    fn number_rules_apply() {
        let field: FieldSchema = NumberField::new().rule(min(18.0)).into();
        assert!(field.check("age", Some(&json!(21))).is_empty());
        assert_eq!(field.check("age", Some(&json!(12))).len(), 1);
    }

    #[test]
    fn boolean_field_checks_type_only() {
        let field: FieldSchema = BooleanField::new().into();
        assert!(field.check("remember", Some(&json!(true))).is_empty());
        assert_eq!(field.check("remember", Some(&json!("yes"))).len(), 1);
    }
}
