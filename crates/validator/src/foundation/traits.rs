//! Core traits for the validation system
//!
//! This module defines the trait every rule implements.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// A rule inspects a single input and either accepts it or describes why it
/// failed. Rules know nothing about field names; the
/// [`Field`](crate::form::Field) cursor attaches the name when it records
/// the failure.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{Validate, ValidationError};
/// use serde_json::Value;
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_str() {
///             Some(s) if s.contains(' ') => {
///                 Err(ValidationError::new("no_spaces", "must not contain spaces"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate(&Value::from("alice")).is_ok());
/// assert!(NoSpaces.validate(&Value::from("a b")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing the failed rule.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_boxed_and_borrowed_rules() {
        let rules: Vec<Box<dyn Validate<Input = str>>> =
            vec![Box::new(AlwaysValid), Box::new(AlwaysFails)];
        let failures = rules.iter().filter(|r| r.validate("x").is_err()).count();
        assert_eq!(failures, 1);

        let by_ref = &AlwaysFails;
        assert!(by_ref.validate("x").is_err());
    }
}
