//! Credential forms and the schemas that admit them.

use safeact_validator::prelude::*;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Message for an email that does not parse.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";
/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Message for a sign-up password below [`MIN_PASSWORD_LENGTH`].
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters";

/// Validated sign-in credentials.
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    /// Account email.
    pub email: String,
    /// Account password.
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
}

/// Validated sign-up credentials.
#[derive(Clone, Deserialize)]
pub struct SignupForm {
    /// Account email.
    pub email: String,
    /// Chosen password.
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Client-side input for the login and signup actions.
///
/// Serialises to the raw `{"email", "password"}` object the schemas read;
/// use it with [`Typed`](safeact_action::Typed).
#[derive(Clone)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: SecretString,
}

impl Credentials {
    /// Bundles an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Credentials", 2)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", self.password.expose_secret())?;
        state.end()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn email_field() -> StringField {
    StringField::new()
        .required()
        .rule(email().with_message(INVALID_EMAIL_MESSAGE))
}

/// Schema for the login form: a well-formed email and any non-empty
/// password.
pub fn login_schema() -> ObjectSchema<LoginForm> {
    ObjectSchema::new()
        .field("email", email_field())
        .field("password", StringField::new().required())
}

/// Schema for the signup form: login rules plus a minimum password length.
pub fn signup_schema() -> ObjectSchema<SignupForm> {
    ObjectSchema::new().field("email", email_field()).field(
        "password",
        StringField::new()
            .required()
            .rule(min_length(MIN_PASSWORD_LENGTH).with_message(SHORT_PASSWORD_MESSAGE)),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn login_accepts_short_password() {
        let form = login_schema()
            .safe_parse(&json!({"email": "a@b.co", "password": "x"}))
            .unwrap();
        assert_eq!(form.email, "a@b.co");
        assert_eq!(form.password.expose_secret(), "x");
    }

    #[test]
    fn login_rejects_blank_fields() {
        let errors = login_schema()
            .safe_parse(&json!({"email": "", "password": ""}))
            .unwrap_err();
        let expected: FieldErrors = [("email", "Required"), ("password", "Required")]
            .into_iter()
            .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn signup_enforces_length_and_format() {
        let errors = signup_schema()
            .safe_parse(&json!({"email": "not-an-email", "password": "short"}))
            .unwrap_err();
        let expected: FieldErrors = [
            ("email", INVALID_EMAIL_MESSAGE),
            ("password", SHORT_PASSWORD_MESSAGE),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn forms_redact_password_in_debug() {
        let form = signup_schema()
            .safe_parse(&json!({"email": "a@b.co", "password": "correct horse"}))
            .unwrap();
        let debug = format!("{form:?}");
        assert!(debug.contains("a@b.co"));
        assert!(!debug.contains("correct horse"));

        let creds = Credentials::new("a@b.co", "correct horse");
        assert!(!format!("{creds:?}").contains("correct horse"));
    }

    #[test]
    fn credentials_serialise_to_raw_form() {
        let creds = Credentials::new("a@b.co", "pw");
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({"email": "a@b.co", "password": "pw"})
        );
    }
}
