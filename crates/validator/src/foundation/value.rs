//! How rules read a field value.
//!
//! Form input arrives as loosely typed [`Value`]s: mostly strings, sometimes
//! numbers, booleans or null. The helpers here pin down exactly what
//! "empty", "numeric" and "as text" mean for such a value, so every rule
//! shares one interpretation.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Whitespace accepted around a numeric string.
const NUMERIC_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .expect("numeric pattern is valid")
});

static NUMERIC_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("numeric prefix pattern is valid")
});

/// Returns true if the value counts as empty.
///
/// Empty values: null, `false`, the number zero, `""`, `"0"`, and empty
/// arrays or objects. Everything else, including `"0.0"` and `" "`, is
/// not empty.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::value::is_blank;
/// use serde_json::json;
///
/// assert!(is_blank(&json!("0")));
/// assert!(is_blank(&json!(0)));
/// assert!(!is_blank(&json!("0.0")));
/// assert!(!is_blank(&json!(" ")));
/// ```
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Returns true if `text` is a numeric string.
///
/// Accepts an optional sign, digits with an optional fraction (`1.`, `.5`),
/// an optional exponent, and surrounding ASCII whitespace.
#[must_use]
pub fn is_numeric_str(text: &str) -> bool {
    NUMERIC_REGEX.is_match(text)
}

/// Returns the numeric value of `value`, if it is numeric.
///
/// JSON numbers and numeric strings are numeric; booleans, null, arrays
/// and objects are not.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric_str(s) => s.trim_matches(NUMERIC_WHITESPACE).parse().ok(),
        _ => None,
    }
}

/// Coerces `value` to a number for bound comparisons.
///
/// Numeric values convert exactly. A non-numeric string uses its leading
/// numeric prefix (`"12abc"` is 12) or 0 when it has none. Null is 0 and
/// booleans are 0 or 1. Arrays and objects have no numeric reading.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(
            NUMERIC_PREFIX_REGEX
                .find(s)
                .and_then(|m| m.as_str().trim_matches(NUMERIC_WHITESPACE).parse().ok())
                .unwrap_or(0.0),
        ),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns the text form of `value`.
///
/// Strings are borrowed as-is, numbers use their JSON form, `true` is `"1"`,
/// `false` and null are `""`, and arrays or objects render as compact JSON.
#[must_use]
pub fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null | Value::Bool(false) => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("1"),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(is_blank(&value), "{value} should be blank");
        }
    }

    #[test]
    fn test_present_values() {
        for value in [
            json!(true),
            json!(-1),
            json!(0.5),
            json!("0.0"),
            json!(" "),
            json!("00"),
            json!("false"),
            json!("admin"),
            json!([0]),
        ] {
            assert!(!is_blank(&value), "{value} should not be blank");
        }
    }

    #[test]
    fn test_numeric_strings() {
        for text in ["42", "-3", "+7", "1.5", "1.", ".5", "1e3", "2.5E-2", " 8", "8 ", "\t9\n"] {
            assert!(is_numeric_str(text), "{text:?} should be numeric");
        }
        for text in ["", " ", ".", "abc", "12abc", "0x1A", "1,5", "--1", "e5", "1e"] {
            assert!(!is_numeric_str(text), "{text:?} should not be numeric");
        }
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(" 63 ")), Some(63.0));
        assert_eq!(as_number(&json!(".5")), Some(0.5));
        assert_eq!(as_number(&json!(12)), Some(12.0));
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!(null)), None);
        assert_eq!(as_number(&json!("abc")), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!("abc")), Some(0.0));
        assert_eq!(coerce_number(&json!("12abc")), Some(12.0));
        assert_eq!(coerce_number(&json!(" 3.5kg")), Some(3.5));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(null)), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(&json!("héllo")), "héllo");
        assert_eq!(as_text(&json!(42)), "42");
        assert_eq!(as_text(&json!(1.5)), "1.5");
        assert_eq!(as_text(&json!(true)), "1");
        assert_eq!(as_text(&json!(false)), "");
        assert_eq!(as_text(&json!(null)), "");
        assert_eq!(as_text(&json!([1, 2])), "[1,2]");
    }
}
