//! Numeric validators
//!
//! [`Numeric`] checks that a value reads as a number. [`AtLeast`] and
//! [`AtMost`] compare against a [`Bound`]; they coerce the value first (see
//! [`coerce_number`]), so they give a verdict even for non-numeric text.

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::foundation::value::{as_number, coerce_number};
use crate::options::Bound;

// ============================================================================
// NUMERIC
// ============================================================================

crate::validator! {
    /// Validates that a value is a number or a numeric string.
    pub Numeric for Value;
    rule(input) { as_number(input).is_some() }
    error(input) { ValidationError::not_a_number() }
    fn numeric();
}

// ============================================================================
// BOUNDS
// ============================================================================

crate::validator! {
    /// Validates that a value is not below a lower bound.
    ///
    /// Arrays and objects have no numeric reading and always pass.
    #[derive(PartialEq)]
    pub AtLeast { bound: Bound } for Value;
    rule(self, input) { coerce_number(input).is_none_or(|n| n >= self.bound.value()) }
    error(self, input) { ValidationError::below_min(&self.bound) }
    fn at_least(bound: Bound);
}

crate::validator! {
    /// Validates that a value does not exceed an upper bound.
    ///
    /// Arrays and objects have no numeric reading and always pass.
    #[derive(PartialEq)]
    pub AtMost { bound: Bound } for Value;
    rule(self, input) { coerce_number(input).is_none_or(|n| n <= self.bound.value()) }
    error(self, input) { ValidationError::above_max(&self.bound) }
    fn at_most(bound: Bound);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    fn bound(raw: Value) -> Bound {
        Bound::parse("min", &raw).unwrap()
    }

    #[test]
    fn test_numeric() {
        let validator = numeric();
        assert!(validator.validate(&json!("63")).is_ok());
        assert!(validator.validate(&json!(-4.5)).is_ok());
        assert!(validator.validate(&json!(" 1e3 ")).is_ok());

        let err = validator.validate(&json!("sixty")).unwrap_err();
        assert_eq!(err.message, "is not a number");
        assert!(validator.validate(&json!("")).is_err());
        assert!(validator.validate(&json!(true)).is_err());
    }

    #[test]
    fn test_at_least() {
        let validator = at_least(bound(json!(18)));
        assert!(validator.validate(&json!("18")).is_ok());
        assert!(validator.validate(&json!(40)).is_ok());

        let err = validator.validate(&json!("17")).unwrap_err();
        assert_eq!(err.message, "must be at least 18");
        assert_eq!(err.param("min"), Some("18"));
    }

    #[test]
    fn test_at_least_coerces_text() {
        let validator = at_least(bound(json!("5")));
        assert!(validator.validate(&json!("abc")).is_err());
        assert!(validator.validate(&json!("7 apples")).is_ok());
        assert!(validator.validate(&json!(["x"])).is_ok());
    }

    #[test]
    fn test_at_most() {
        let validator = at_most(bound(json!("99.5")));
        assert!(validator.validate(&json!(99.5)).is_ok());

        let err = validator.validate(&json!("100")).unwrap_err();
        assert_eq!(err.code, "max");
        assert_eq!(err.message, "cannot exceed 99.5");
    }
}
