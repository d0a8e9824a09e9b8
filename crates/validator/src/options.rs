//! Rule options
//!
//! [`RangeOptions`] and [`LengthOptions`] carry the optional `min` / `max`
//! bounds of [`check_numeric`](crate::form::Field::check_numeric) and
//! [`check_length`](crate::form::Field::check_length). Bounds are stored
//! as raw [`Value`]s so options can come straight from JSON configuration;
//! each provided bound is turned into a [`Bound`] (or rejected) before the
//! rule touches any results.
//!
//! ```
//! use formcheck_validator::options::{LengthMode, LengthOptions};
//!
//! let from_code = LengthOptions::new().min(3).max(25);
//! let from_config: LengthOptions =
//!     serde_json::from_str(r#"{ "min": 3, "max": 25, "mode": "bytes" }"#).unwrap();
//!
//! assert_eq!(from_code, from_config);
//! assert_eq!(from_config.mode, LengthMode::Bytes);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::value::{as_number, as_text};
use crate::form::UsageError;

// ============================================================================
// BOUND
// ============================================================================

/// A validated numeric bound.
///
/// Displays exactly as it was supplied, so `"25"` and `25` both render as
/// `25` and `2.5` stays `2.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    value: f64,
    text: String,
}

impl Bound {
    /// Parses the option named `option` from `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidOption`] if `raw` is not numeric.
    pub fn parse(option: &'static str, raw: &Value) -> Result<Self, UsageError> {
        match as_number(raw) {
            Some(value) => Ok(Self {
                value,
                text: as_text(raw).into_owned(),
            }),
            None => Err(UsageError::InvalidOption {
                option,
                value: raw.to_string(),
            }),
        }
    }

    /// The numeric value of the bound.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_bounds(
    min: Option<&Value>,
    max: Option<&Value>,
) -> Result<(Option<Bound>, Option<Bound>), UsageError> {
    let min = min.map(|raw| Bound::parse("min", raw)).transpose()?;
    let max = max.map(|raw| Bound::parse("max", raw)).transpose()?;
    Ok((min, max))
}

// ============================================================================
// RANGE OPTIONS
// ============================================================================

/// Bounds for [`check_numeric`](crate::form::Field::check_numeric).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeOptions {
    /// Inclusive lower bound.
    pub min: Option<Value>,
    /// Inclusive upper bound.
    pub max: Option<Value>,
}

impl RangeOptions {
    /// Creates options with no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Validates the provided bounds.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidOption`] naming the first non-numeric
    /// bound, `min` before `max`.
    pub fn bounds(&self) -> Result<(Option<Bound>, Option<Bound>), UsageError> {
        parse_bounds(self.min.as_ref(), self.max.as_ref())
    }
}

// ============================================================================
// LENGTH OPTIONS
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count UTF-8 bytes, like `str::len`.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

/// Bounds for [`check_length`](crate::form::Field::check_length).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LengthOptions {
    /// Inclusive minimum length.
    pub min: Option<Value>,
    /// Inclusive maximum length.
    pub max: Option<Value>,
    /// How length is counted.
    pub mode: LengthMode,
}

impl LengthOptions {
    /// Creates options with no bounds, counting bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Sets how length is counted.
    #[must_use = "builder methods must be chained or built"]
    pub const fn mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validates the provided bounds.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidOption`] naming the first non-numeric
    /// bound, `min` before `max`.
    pub fn bounds(&self) -> Result<(Option<Bound>, Option<Bound>), UsageError> {
        parse_bounds(self.min.as_ref(), self.max.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bound_keeps_supplied_text() {
        let bound = Bound::parse("min", &json!("25")).unwrap();
        assert_eq!(bound.value(), 25.0);
        assert_eq!(bound.to_string(), "25");

        let bound = Bound::parse("max", &json!(2.5)).unwrap();
        assert_eq!(bound.to_string(), "2.5");
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let err = Bound::parse("min", &json!("abc")).unwrap_err();
        assert_eq!(
            err,
            UsageError::InvalidOption {
                option: "min",
                value: "\"abc\"".into(),
            }
        );
        assert!(Bound::parse("max", &json!(true)).is_err());
        assert!(Bound::parse("max", &json!(null)).is_err());
    }

    #[test]
    fn test_min_is_checked_before_max() {
        let options = RangeOptions::new().min("x").max("y");
        assert!(matches!(
            options.bounds(),
            Err(UsageError::InvalidOption { option: "min", .. })
        ));

        let options = RangeOptions::new().min(1).max("y");
        assert!(matches!(
            options.bounds(),
            Err(UsageError::InvalidOption { option: "max", .. })
        ));
    }

    #[test]
    fn test_absent_bounds() {
        let (min, max) = RangeOptions::default().bounds().unwrap();
        assert!(min.is_none() && max.is_none());
    }

    #[test]
    fn test_length_mode_measure() {
        assert_eq!(LengthMode::Bytes.measure("héllo"), 6);
        assert_eq!(LengthMode::Chars.measure("héllo"), 5);
    }

    #[test]
    fn test_options_from_json() {
        let options: RangeOptions = serde_json::from_str(r#"{ "min": "18" }"#).unwrap();
        assert_eq!(options, RangeOptions::new().min("18"));

        let options: LengthOptions = serde_json::from_str(r#"{ "max": 10, "mode": "chars" }"#).unwrap();
        assert_eq!(options, LengthOptions::new().max(10).mode(LengthMode::Chars));

        let unknown = serde_json::from_str::<RangeOptions>(r#"{ "minimum": 1 }"#);
        assert!(unknown.is_err());
    }
}
