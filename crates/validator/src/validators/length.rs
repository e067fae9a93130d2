//! String length validators
//!
//! Length is measured in Unicode scalar values (chars) by default. Use the
//! `bytes` constructors when the input is known to be ASCII.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) {
        ValidationError::new("min_length", format!("Must be at least {} characters", self.min))
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) {
        ValidationError::new("max_length", format!("Must be at most {} characters", self.max))
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foundation::Validate;

    #[rstest]
    #[case("", false)]
    #[case(" ", true)]
    #[case("a", true)]
    fn not_empty_cases(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(not_empty().validate(input).is_ok(), ok);
    }

    #[test]
    fn min_length_counts_chars() {
        let v = min_length(3);
        assert!(v.validate("héé").is_ok());
        assert!(MinLength::bytes(6).validate("héé").is_err());
    }

    #[test]
    fn min_length_error_names_limit() {
        let err = min_length(8).validate("abc").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.message, "Must be at least 8 characters");
    }

    #[test]
    fn max_length_boundary() {
        let v = max_length(3);
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("abcd").is_err());
        assert!(MaxLength::bytes(3).validate("éé").is_err());
    }
}
