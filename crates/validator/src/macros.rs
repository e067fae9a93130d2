//! The [`validator!`] macro behind the built-in rules.
//!
//! ```
//! use safeact_validator::validator;
//! use safeact_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NoWhitespace for str;
//!     rule(input) { !input.chars().any(char::is_whitespace) }
//!     error(input) { ValidationError::new("no_whitespace", "Must not contain spaces") }
//!     fn no_whitespace();
//! }
//!
//! assert!(no_whitespace().validate("alice").is_ok());
//! assert!(no_whitespace().validate("al ice").is_err());
//! ```

/// Declares a validator struct, its `Validate` impl and a factory function.
///
/// `rule` is a boolean block; `error` builds the [`ValidationError`] returned
/// when it is false. Three shapes are accepted:
///
/// - unit: `pub Name for Input; rule(input) {..} error(input) {..} fn name();`
/// - fields with an explicit constructor:
///   `pub Name { a: A } for Input; rule(self, input) {..} error(self, input) {..}
///   new(args) { body } fn name(args);`
/// - one generic parameter with identifier bounds, constructed from its
///   fields: `pub Name<T: Bound> { a: T } for T; rule(..) {..} error(..) {..} fn name(a: T);`
///
/// [`ValidationError`]: crate::foundation::ValidationError
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            /// Creates the validator.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}
