//! Lenient numeric input.
//!
//! Form fields arrive on every keystroke and are frequently empty, half typed
//! (`"12."`, `"1e"`) or plain garbage. [`NumericInput`] keeps whatever could be
//! parsed and exposes a normalised value that is never negative and never
//! fails to evaluate: anything unusable reads as zero.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric form field that may be missing or malformed.
///
/// Deserializes from a JSON number, a JSON string, or `null`.
///
/// # Example
///
/// ```rust
/// use btrust_core::NumericInput;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(NumericInput::from(" 2.5 ").value(), dec!(2.5));
/// assert_eq!(NumericInput::from("").value(), dec!(0));
/// assert_eq!(NumericInput::from("-10").value(), dec!(0));
/// assert_eq!(NumericInput::from("-10").raw(), Some(dec!(-10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericInput {
    parsed: Option<Decimal>,
    malformed: bool,
}

impl NumericInput {
    /// An empty field.
    pub const EMPTY: Self = Self {
        parsed: None,
        malformed: false,
    };

    /// Creates an input holding an already parsed value.
    pub fn new(value: Decimal) -> Self {
        Self {
            parsed: Some(value),
            malformed: false,
        }
    }

    /// Parses user text. Whitespace is ignored; scientific notation is accepted.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::EMPTY;
        }
        let parsed = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok();
        Self {
            parsed,
            malformed: parsed.is_none(),
        }
    }

    /// The parsed value, if the field held a number (possibly negative).
    pub fn raw(&self) -> Option<Decimal> {
        self.parsed
    }

    /// Returns true if the field held a number.
    pub fn is_present(&self) -> bool {
        self.parsed.is_some()
    }

    /// Returns true if the field held something that is not a number.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Normalised value: missing, malformed and negative inputs are zero.
    pub fn value(&self) -> Decimal {
        match self.parsed {
            Some(v) if v.is_sign_positive() => v,
            _ => Decimal::ZERO,
        }
    }

    /// Normalised value truncated to a whole number of units.
    ///
    /// Values too large for `u64` saturate at `u64::MAX`.
    pub fn whole_units(&self) -> u64 {
        self.value().trunc().to_u64().unwrap_or(u64::MAX)
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for NumericInput {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl From<f64> for NumericInput {
    /// NaN, infinities and out-of-range values read as malformed.
    fn from(value: f64) -> Self {
        let parsed = Decimal::from_f64(value);
        Self {
            parsed,
            malformed: parsed.is_none(),
        }
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::EMPTY, Into::into)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parsed {
            Some(v) => write!(f, "{v}"),
            None if self.malformed => write!(f, "NaN"),
            None => write!(f, "-"),
        }
    }
}

/// Wire shapes accepted for a numeric field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    Missing,
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawField::deserialize(deserializer)? {
            RawField::Number(n) => Self::from(n),
            RawField::Text(s) => Self::parse(&s),
            RawField::Missing => Self::EMPTY,
        })
    }
}

impl Serialize for NumericInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.parsed.serialize(serializer)
    }
}
