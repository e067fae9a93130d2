//! Numeric range validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
    }
    fn max(value: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn min_inclusive() {
        assert!(min(18.0).validate(&18.0).is_ok());
        let err = min(18.0).validate(&17.5).unwrap_err();
        assert_eq!(err.message, "Value must be at least 18");
    }

    #[test]
    fn max_inclusive() {
        assert!(max(10_i64).validate(&10).is_ok());
        assert!(max(10_i64).validate(&11).is_err());
    }
}
