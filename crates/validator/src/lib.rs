//! # safeact-validator
//!
//! The schema validator used by safeact actions: composable validators for
//! single values and object schemas that report failures per field.
//!
//! ## Quick Start
//!
//! ```
//! use safeact_validator::prelude::*;
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Debug, Deserialize)]
//! struct Login {
//!     email: String,
//!     password: String,
//! }
//!
//! let schema = ObjectSchema::<Login>::new()
//!     .field("email", StringField::new().required().rule(email().with_message("Invalid email")))
//!     .field("password", StringField::new().required());
//!
//! let errors = schema.safe_parse(&json!({"email": "", "password": "x"})).unwrap_err();
//! assert_eq!(errors.get("email"), Some(&["Required".to_string()][..]));
//! assert!(!errors.contains("password"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
