//! # formcheck-validator
//!
//! Rule-chaining validation for submitted form fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! # fn main() -> Result<(), UsageError> {
//! let mut form = Validator::new([("email", "not-an-email"), ("age", "17")]);
//!
//! form.select_field("email")?
//!     .check_not_empty()
//!     .check_email()
//!     .select_field("age")?
//!     .check_numeric(RangeOptions::new().min(18))?;
//!
//! assert_eq!(form.results()["email"], "Field 'email' is not a valid email");
//! assert_eq!(form.results()["age"], "Field 'age' must be at least 18");
//! # Ok(())
//! # }
//! ```
//!
//! ## Two kinds of failure
//!
//! - A value breaking a rule is data: it is recorded in the results, keyed by
//!   field, and the chain carries on. A later failure for the same field
//!   replaces the earlier message.
//! - Misusing the API (selecting a field that was not submitted, passing a
//!   non-numeric bound) returns [`UsageError`](form::UsageError) at the call
//!   site and records nothing.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`NotEmpty`](validators::NotEmpty)
//! - **Numeric**: [`Numeric`](validators::Numeric), [`AtLeast`](validators::AtLeast),
//!   [`AtMost`](validators::AtMost)
//! - **Content**: [`Email`](validators::Email)
//! - **Length**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength)
//!
//! Custom rules implement [`Validate`](foundation::Validate) (or use the
//! [`validator!`] macro) and run through [`Field::check`](form::Field::check).

pub mod form;
pub mod foundation;
mod macros;
pub mod options;
pub mod prelude;
pub mod validators;
