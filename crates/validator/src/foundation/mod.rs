//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Values**: [`value`] helpers defining emptiness, numeric strings and
//!   text coercion for loosely typed form input
//!
//! Rules are generic over their input type, so a rule written for
//! `serde_json::Value` can run standalone or inside a
//! [`Validator`](crate::form::Validator) chain:
//!
//! ```
//! use formcheck_validator::foundation::Validate;
//! use formcheck_validator::validators::not_empty;
//! use serde_json::json;
//!
//! assert!(not_empty().validate(&json!("hello")).is_ok());
//! assert!(not_empty().validate(&json!("0")).is_err());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;
