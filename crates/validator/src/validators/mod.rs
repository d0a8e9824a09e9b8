//! Built-in validators
//!
//! Ready-to-use rules over `serde_json::Value` field values. Each one is
//! usable standalone through [`Validate`](crate::foundation::Validate) or
//! inside a chain through the matching `check_*` method on
//! [`Field`](crate::form::Field).
//!
//! # Categories
//!
//! - **Presence**: [`NotEmpty`]
//! - **Numeric**: [`Numeric`], [`AtLeast`], [`AtMost`]
//! - **Content**: [`Email`]
//! - **Length**: [`MinLength`], [`MaxLength`]

pub mod content;
pub mod length;
pub mod numeric;
pub mod presence;

pub use content::{Email, email};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use numeric::{AtLeast, AtMost, Numeric, at_least, at_most, numeric};
pub use presence::{NotEmpty, not_empty};
