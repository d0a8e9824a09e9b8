//! Content validators
//!
//! Validators for checking the textual shape of a value.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::foundation::value::as_text;

/// Word characters, hyphens and dots, then `@`, then one or more
/// `label.` groups and a final label of at least two characters.
/// `\w` is ASCII-only here, and one trailing newline is tolerated.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9_.\-]+@(?:[A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,}\n?\z")
        .expect("email pattern is valid")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// This is a syntactic approximation: no plus-addressing, quoted local
    /// parts or IP-literal domains, and the domain needs at least one dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::email;
    /// use serde_json::json;
    ///
    /// assert!(email().validate(&json!("user.name@sub.example.com")).is_ok());
    /// assert!(email().validate(&json!("user@localhost")).is_err());
    /// ```
    pub Email for Value;
    rule(input) { EMAIL_REGEX.is_match(&as_text(input)) }
    error(input) { ValidationError::invalid_email() }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
