//! Presence validators

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::foundation::value::is_blank;

crate::validator! {
    /// Validates that a value is not empty.
    ///
    /// Emptiness is loose: null, `false`, zero, `""` and `"0"` are all empty.
    /// See [`is_blank`] for the full list.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::not_empty;
    /// use serde_json::json;
    ///
    /// assert!(not_empty().validate(&json!("admin")).is_ok());
    /// assert!(not_empty().validate(&json!("0.0")).is_ok());
    /// assert!(not_empty().validate(&json!(0)).is_err());
    /// ```
    pub NotEmpty for Value;
    rule(input) { !is_blank(input) }
    error(input) { ValidationError::empty() }
    fn not_empty();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_not_empty() {
        let validator = not_empty();
        assert!(validator.validate(&json!("Datena")).is_ok());
        assert!(validator.validate(&json!(" ")).is_ok());

        let err = validator.validate(&json!("")).unwrap_err();
        assert_eq!(err.code, "not_empty");
        assert_eq!(err.message, "is empty");
        assert!(validator.validate(&json!(null)).is_err());
    }
}
