//! Form validation
//!
//! A [`Validator`] owns the submitted field values and the accumulated
//! [`ValidationErrors`]. Selecting a field returns a [`Field`] cursor that
//! carries the selection; rules run on the cursor and each returns it again,
//! so a whole form reads as one chain:
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! # fn main() -> Result<(), UsageError> {
//! let mut form = Validator::new([
//!     ("name", "Datena"),
//!     ("age", "sixty-three"),
//!     ("email", "datena@example.com"),
//! ]);
//!
//! form.select_field("name")?
//!     .check_not_empty()
//!     .check_length(LengthOptions::new().min(3).max(25))?
//!     .select_field("age")?
//!     .check_not_empty()
//!     .check_numeric(RangeOptions::new())?
//!     .select_field("email")?
//!     .check_email();
//!
//! assert_eq!(form.results()["age"], "Field 'age' is not a number");
//! assert_eq!(form.results().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Failed rules never interrupt the chain. For a given field the last
//! failing rule wins: its message replaces any earlier one.
//!
//! Misuse is reported separately, as [`UsageError`]: selecting a field that
//! was not submitted, or passing a non-numeric bound. These return `Err`
//! immediately and never touch the results.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::foundation::{Validate, ValidationError, ValidationErrors};
use crate::options::{LengthOptions, RangeOptions};
use crate::validators::{AtLeast, AtMost, Email, MaxLength, MinLength, NotEmpty, Numeric};

// ============================================================================
// USAGE ERROR
// ============================================================================

/// Caller misuse of the validator API.
///
/// Unlike a failed rule, these indicate a bug in the calling code rather
/// than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// The selected field is not part of the input.
    #[error("field '{0}' not found in input")]
    FieldNotFound(String),

    /// A rule option that must be numeric is not.
    #[error("option '{option}' must be numeric, got {value}")]
    InvalidOption {
        /// Option name, `min` or `max`.
        option: &'static str,
        /// The rejected value, as JSON.
        value: String,
    },

    /// Input supplied as JSON was not an object.
    #[error("input must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates named input values and collects one error per failed field.
///
/// The input is fixed at construction. Results only grow or get
/// overwritten; nothing clears them.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    input: IndexMap<String, Value>,
    errors: ValidationErrors,
}

impl Validator {
    /// Creates a validator over the given field values.
    pub fn new<I, K, V>(input: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            input: input
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            errors: ValidationErrors::new(),
        }
    }

    /// Creates a validator from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NotAnObject`] for any other JSON value.
    pub fn from_json(input: Value) -> Result<Self, UsageError> {
        match input {
            Value::Object(map) => Ok(Self::from(map)),
            Value::Null => Err(UsageError::NotAnObject("null")),
            Value::Bool(_) => Err(UsageError::NotAnObject("a boolean")),
            Value::Number(_) => Err(UsageError::NotAnObject("a number")),
            Value::String(_) => Err(UsageError::NotAnObject("a string")),
            Value::Array(_) => Err(UsageError::NotAnObject("an array")),
        }
    }

    /// Selects a field, returning the cursor that rules run on.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::FieldNotFound`] if `name` is not in the input.
    pub fn select_field(&mut self, name: &str) -> Result<Field<'_>, UsageError> {
        let Some((name, value)) = self.input.get_key_value(name) else {
            tracing::warn!(field = name, "selected field is not in the input");
            return Err(UsageError::FieldNotFound(name.to_owned()));
        };
        tracing::trace!(field = %name, "field selected");
        let selection = Selection {
            name: name.clone(),
            value: value.clone(),
        };
        Ok(Field {
            validator: self,
            selection,
        })
    }

    /// Returns a snapshot of the results as field → message.
    #[must_use]
    pub fn results(&self) -> IndexMap<String, String> {
        self.errors.messages()
    }

    /// Returns the structured errors recorded so far.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the validator, returning the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Returns true if no rule has failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the input the validator was built with.
    #[must_use]
    pub const fn input(&self) -> &IndexMap<String, Value> {
        &self.input
    }

    fn record(&mut self, field: &str, error: ValidationError) {
        tracing::debug!(field, code = %error.code, "rule failed");
        let error = error.with_field(field.to_owned());
        self.errors.record(field, error);
    }
}

impl From<Map<String, Value>> for Validator {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// The field currently under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: String,
    value: Value,
}

impl Selection {
    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field value, as submitted.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

// ============================================================================
// FIELD CURSOR
// ============================================================================

/// A selected field with access to the validator's results.
///
/// Returned by [`Validator::select_field`]. Every rule method consumes the
/// cursor and hands it back, and [`Field::select_field`] moves the chain on
/// to the next field.
#[derive(Debug)]
pub struct Field<'v> {
    validator: &'v mut Validator,
    selection: Selection,
}

impl<'v> Field<'v> {
    /// The current selection.
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Moves the chain on to another field.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::FieldNotFound`] if `name` is not in the input.
    pub fn select_field(self, name: &str) -> Result<Self, UsageError> {
        let validator = self.validator;
        validator.select_field(name)
    }

    /// Applies any rule over the field value, recording its error on failure.
    pub fn check<V>(self, rule: &V) -> Self
    where
        V: Validate<Input = Value> + ?Sized,
    {
        if let Err(error) = rule.validate(&self.selection.value) {
            self.validator.record(&self.selection.name, error);
        }
        self
    }

    /// Records `Field '<name>' is empty` if the value is empty.
    ///
    /// See [`is_blank`](crate::foundation::value::is_blank) for what counts
    /// as empty.
    pub fn check_not_empty(self) -> Self {
        self.check(&NotEmpty)
    }

    /// Checks that the value is numeric and within the optional bounds.
    ///
    /// Runs three independent checks in order: numeric, then `min`, then
    /// `max`. Each failure overwrites the previous one, so the last failing
    /// check decides the message.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidOption`] if a bound is not numeric.
    /// Bounds are checked before any rule runs.
    pub fn check_numeric(self, options: RangeOptions) -> Result<Self, UsageError> {
        let (min, max) = options.bounds().inspect_err(|err| {
            tracing::warn!(field = %self.selection.name, %err, "invalid numeric option");
        })?;
        let mut field = self.check(&Numeric);
        if let Some(bound) = min {
            field = field.check(&AtLeast::new(bound));
        }
        if let Some(bound) = max {
            field = field.check(&AtMost::new(bound));
        }
        Ok(field)
    }

    /// Records `Field '<name>' is not a valid email` if the value does not
    /// look like an email address.
    pub fn check_email(self) -> Self {
        self.check(&Email)
    }

    /// Checks the length of the value's text against the optional bounds.
    ///
    /// `min` runs before `max`, so when both fail the `max` message wins.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidOption`] if a bound is not numeric.
    /// Bounds are checked before any rule runs.
    pub fn check_length(self, options: LengthOptions) -> Result<Self, UsageError> {
        let (min, max) = options.bounds().inspect_err(|err| {
            tracing::warn!(field = %self.selection.name, %err, "invalid length option");
        })?;
        let mut field = self;
        if let Some(bound) = min {
            field = field.check(&MinLength {
                bound,
                mode: options.mode,
            });
        }
        if let Some(bound) = max {
            field = field.check(&MaxLength {
                bound,
                mode: options.mode,
            });
        }
        Ok(field)
    }

    /// Ends the chain, returning the validator.
    pub fn finish(self) -> &'v mut Validator {
        self.validator
    }
}

// ============================================================================
// TESTS
// ============================================================================
