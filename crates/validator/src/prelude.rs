//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that
//! brings in the validator, its options, the rule trait and errors.

// ============================================================================
// FORM: Validator, cursor, usage errors
// ============================================================================

pub use crate::form::{Field, Selection, UsageError, Validator};
pub use crate::options::{Bound, LengthMode, LengthOptions, RangeOptions};

// ============================================================================
// FOUNDATION: Core trait and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::*;
