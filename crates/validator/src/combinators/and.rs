//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned; the right validator is not run when the left one fails.
///
/// ```
/// use safeact_validator::combinators::And;
/// use safeact_validator::foundation::Validate;
/// use safeact_validator::validators::{max_length, min_length};
///
/// let validator = And::new(min_length(5), max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// assert!(validator.validate("verylongstring").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator.
pub fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length};

    #[test]
    fn left_failure_wins() {
        let v = and(min_length(5), max_length(2));
        let err = v.validate("abc").unwrap_err();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn right_failure_reported_when_left_passes() {
        let v = and(min_length(1), max_length(2));
        let err = v.validate("abc").unwrap_err();
        assert_eq!(err.code, "max_length");
    }

    #[test]
    fn both_pass() {
        let v = and(min_length(1), max_length(5));
        assert!(v.validate("abc").is_ok());
    }
}
