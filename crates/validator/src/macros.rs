//! Macros for creating rules with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::{Validate, ValidationError};
//! use serde_json::Value;
//!
//! // Unit rule (no fields)
//! validator! {
//!     pub IsString for Value;
//!     rule(input) { input.is_string() }
//!     error(input) { ValidationError::new("string", "is not text") }
//!     fn is_string();
//! }
//!
//! // Rule with fields
//! validator! {
//!     #[derive(PartialEq, Eq)]
//!     pub OneOf { choices: Vec<String> } for Value;
//!     rule(self, input) { input.as_str().is_some_and(|s| self.choices.iter().any(|c| c == s)) }
//!     error(self, input) { ValidationError::new("one_of", "is not an allowed choice") }
//!     fn one_of(choices: Vec<String>);
//! }
//!
//! assert!(is_string().validate(&Value::from("x")).is_ok());
//! assert!(one_of(vec!["a".into()]).validate(&Value::from("b")).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for Value;
///     rule(input) { !is_blank(input) }
///     error(input) { ValidationError::empty() }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub AtLeast { bound: Bound } for Value;
///     rule(self, input) { coerce_number(input).is_none_or(|n| n >= self.bound.value()) }
///     error(self, input) { ValidationError::below_min(&self.bound) }
///     fn at_least(bound: Bound);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub MinLength { bound: Bound, mode: LengthMode } for Value;
///     rule(self, input) { ... }
///     error(self, input) { ... }
///     new(bound: Bound) { Self { bound, mode: LengthMode::Bytes } }
///     fn min_length(bound: Bound);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared `Validate` impl for struct rules ──────────────────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit rule, no factory ────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
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
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
