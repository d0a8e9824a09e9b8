//! Error types for validation failures
//!
//! [`ValidationError`] describes one failed rule. [`ValidationErrors`] is the
//! per-field result mapping a [`Validator`](crate::form::Validator) builds up:
//! at most one error per field, and a later failure for the same field
//! replaces the earlier one.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// The `message` is the predicate part of the sentence ("is empty",
/// "must be at least 3"). Once a field is attached the error renders as
/// `Field '<field>' <message>`.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "must be at least 18")
///     .with_field("age")
///     .with_param("min", "18");
///
/// assert_eq!(error.to_string(), "Field 'age' must be at least 18");
/// assert_eq!(error.param("min"), Some("18"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "not_empty", "email", "min_length"
    pub code: Cow<'static, str>,

    /// Human-readable predicate, without the field name.
    pub message: Cow<'static, str>,

    /// Name of the field the error was recorded for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters of the failed rule, e.g. `[("min", "3"), ("actual", "2")]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "Field '{field}' {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "not_empty" error.
    pub fn empty() -> Self {
        Self::new("not_empty", "is empty")
    }

    /// Creates a "numeric" error.
    pub fn not_a_number() -> Self {
        Self::new("numeric", "is not a number")
    }

    /// Creates a "min" error for a numeric lower bound.
    pub fn below_min(min: impl fmt::Display) -> Self {
        Self::new("min", format!("must be at least {min}")).with_param("min", min.to_string())
    }

    /// Creates a "max" error for a numeric upper bound.
    pub fn above_max(max: impl fmt::Display) -> Self {
        Self::new("max", format!("cannot exceed {max}")).with_param("max", max.to_string())
    }

    /// Creates an "email" error.
    pub fn invalid_email() -> Self {
        Self::new("email", "is not a valid email")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: impl fmt::Display, actual: usize) -> Self {
        Self::new("min_length", format!("must be at least {min} characters long"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: impl fmt::Display, actual: usize) -> Self {
        Self::new("max_length", format!("cannot exceed {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Validation errors keyed by field name.
///
/// Holds at most one error per field. Recording an error for a field that
/// already has one replaces it in place, so iteration order follows the
/// first failure of each field.
///
/// Serializes as a flat `{ "field": "message" }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: IndexMap<String, ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    /// Records an error for `field`, replacing any previous one.
    ///
    /// Returns the replaced error, if there was one.
    pub fn record(
        &mut self,
        field: impl Into<String>,
        error: ValidationError,
    ) -> Option<ValidationError> {
        self.errors.insert(field.into(), error)
    }

    /// Returns the error recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Returns the rendered message recorded for `field`.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over `(field, error)` pairs in first-failure order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders every error into an owned field → message map.
    #[must_use]
    pub fn messages(&self) -> IndexMap<String, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.clone(), error.to_string()))
            .collect()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a String, &'a ValidationError);
    type IntoIter = indexmap::map::Iter<'a, String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.errors
                .iter()
                .map(|(field, error)| (field, error.to_string())),
        )
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.values().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
