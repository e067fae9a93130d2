//! Built-in validators
//!
//! - **Length**: [`NotEmpty`], [`MinLength`], [`MaxLength`]
//! - **Content**: [`Email`], [`MatchesRegex`]
//! - **Numeric**: [`Min`], [`Max`]

pub mod content;
pub mod length;
pub mod range;

pub use content::{Email, MatchesRegex, email, matches_regex};
pub use length::{LengthMode, MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use range::{Max, Min, max, min};
