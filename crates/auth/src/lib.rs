//! # safeact auth
//!
//! Email/password login and signup as safe actions. The backend sits
//! behind [`AuthProvider`]; the actions validate the form, call the
//! provider and classify its answer:
//!
//! | Outcome | Login | Signup |
//! |---|---|---|
//! | provider opened a session | success `"Login success!"` | success `"Signup success!"` |
//! | provider answered without a session | domain error `"Login error!"` | success `"Signup success!"` |
//! | [`AuthError::Rejected`] | domain error, 400 | domain error, 400 |
//! | [`AuthError::Unavailable`] | domain error, 503 | domain error, 503 |
//!
//! Passwords are moved into [`secrecy::SecretString`] as soon as the form
//! is parsed and never appear in `Debug` output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Login and signup actions.
pub mod actions;
/// Provider failures.
pub mod error;
pub mod form;
pub mod provider;

pub use actions::{
    LOGIN_ACTION, LoginAction, LoginHandler, SIGNUP_ACTION, SignupAction, SignupHandler,
    login_action, signup_action,
};
pub use error::AuthError;
pub use form::{Credentials, LoginForm, SignupForm, login_schema, signup_schema};
pub use provider::{AuthProvider, AuthResponse, Session, User};
