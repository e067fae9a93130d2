//! Object schemas: per-field rules plus typed deserialisation.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::field::json_type_name;
use super::{FieldSchema, Schema};
use crate::foundation::{FieldErrors, ROOT_FIELD};

type Predicate = Box<dyn Fn(&serde_json::Map<String, Value>) -> bool + Send + Sync>;

struct Refinement {
    field: String,
    message: String,
    predicate: Predicate,
}

/// Schema for a JSON object that deserialises into `T` once every field
/// passes.
///
/// Fields are checked in declaration order and every failing rule of a
/// field is reported, so a field may carry several messages. Keys that are
/// not declared are ignored by validation and left to `T`'s `Deserialize`
/// impl.
///
/// ```
/// use serde::Deserialize;
/// use serde_json::json;
/// use safeact_validator::foundation::ValidateExt;
/// use safeact_validator::schema::{ObjectSchema, Schema, StringField};
/// use safeact_validator::validators::email;
///
/// #[derive(Debug, Deserialize)]
/// struct Invite {
///     email: String,
/// }
///
/// let schema = ObjectSchema::<Invite>::new()
///     .field("email", StringField::new().required().rule(email().with_message("Invalid email")));
///
/// let invite = schema.safe_parse(&json!({"email": "a@b.io"})).unwrap();
/// assert_eq!(invite.email, "a@b.io");
///
/// let errors = schema.safe_parse(&json!({"email": ""})).unwrap_err();
/// assert_eq!(errors.get("email"), Some(&["Required".to_string()][..]));
/// ```
pub struct ObjectSchema<T> {
    fields: Vec<(String, FieldSchema)>,
    refinements: Vec<Refinement>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for ObjectSchema<T> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            refinements: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<T> ObjectSchema<T> {
    /// Creates an empty object schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Declaring the same name twice replaces the first
    /// declaration in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, field: impl Into<FieldSchema>) -> Self {
        let name = name.into();
        let field = field.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((name, field)),
        }
        self
    }

    /// Adds a cross-field check reported under `field`.
    ///
    /// Refinements only run when every declared field passed on its own.
    #[must_use = "builder methods must be chained or built"]
    pub fn refine<F>(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&serde_json::Map<String, Value>) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            field: field.into(),
            message: message.into(),
            predicate: Box::new(predicate),
        });
        self
    }

    /// Declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    fn check_object(&self, object: &serde_json::Map<String, Value>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (name, field) in &self.fields {
            for error in field.check(name, object.get(name)) {
                errors.push_error(name.as_str(), &error);
            }
        }

        if errors.is_empty() {
            for refinement in &self.refinements {
                if !(refinement.predicate)(object) {
                    errors.push(refinement.field.as_str(), refinement.message.as_str());
                }
            }
        }

        errors
    }
}

impl<T> Schema for ObjectSchema<T>
where
    T: DeserializeOwned,
{
    type Output = T;

    fn safe_parse(&self, raw: &Value) -> Result<T, FieldErrors> {
        let Value::Object(object) = raw else {
            let mut errors = FieldErrors::new();
            errors.push(
                ROOT_FIELD,
                format!("Expected object, received {}", json_type_name(raw)),
            );
            return Err(errors);
        };

        let errors = self.check_object(object);
        if !errors.is_empty() {
            return Err(errors);
        }

        T::deserialize(raw).map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.push(ROOT_FIELD, e.to_string());
            errors
        })
    }
}

impl<T> fmt::Debug for ObjectSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("fields", &self.fields)
            .field("refinements", &self.refinements.len())
            .finish()
    }
}
