//! Validator combinators
//!
//! - [`And`]: both validators must pass, first failure wins
//! - [`WithMessage`]: replace the user-facing message of a validator

mod and;
mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
