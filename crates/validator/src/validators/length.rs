//! String length validators
//!
//! Length is measured on the value's text form. By default that is the
//! byte count, matching `str::len`; use [`LengthMode::Chars`] to count
//! Unicode scalar values instead.

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::foundation::value::as_text;
use crate::options::{Bound, LengthMode};

#[allow(clippy::cast_precision_loss)]
fn measure(mode: LengthMode, input: &Value) -> (usize, f64) {
    let len = mode.measure(&as_text(input));
    (len, len as f64)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a value's text has at least a minimum length.
    #[derive(PartialEq)]
    pub MinLength { bound: Bound, mode: LengthMode } for Value;
    rule(self, input) { measure(self.mode, input).1 >= self.bound.value() }
    error(self, input) { ValidationError::min_length(&self.bound, measure(self.mode, input).0) }
    new(bound: Bound) { Self { bound, mode: LengthMode::Bytes } }
    fn min_length(bound: Bound);
}

impl MinLength {
    /// Creates a minimum length validator that counts Unicode chars.
    #[must_use]
    pub fn chars(bound: Bound) -> Self {
        Self {
            bound,
            mode: LengthMode::Chars,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a value's text does not exceed a maximum length.
    #[derive(PartialEq)]
    pub MaxLength { bound: Bound, mode: LengthMode } for Value;
    rule(self, input) { measure(self.mode, input).1 <= self.bound.value() }
    error(self, input) { ValidationError::max_length(&self.bound, measure(self.mode, input).0) }
    new(bound: Bound) { Self { bound, mode: LengthMode::Bytes } }
    fn max_length(bound: Bound);
}

impl MaxLength {
    /// Creates a maximum length validator that counts Unicode chars.
    #[must_use]
    pub fn chars(bound: Bound) -> Self {
        Self {
            bound,
            mode: LengthMode::Chars,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
