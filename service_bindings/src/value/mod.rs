//! Raw value model handed to the typed views.
//!
//! External parsers produce [`RawValue`] trees built only from primitives,
//! nested mappings and nested sequences. The typed views in [`crate::view`]
//! wrap those trees; nothing in this module inspects where the data came
//! from.

mod decimal;

use std::collections::BTreeMap;
use std::fmt;

pub use decimal::{Decimal, ParseDecimalError};

/// Kind of value stored in a view, as reported by cast failures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ValueKind {
    /// The explicit empty marker.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Signed 64-bit integer.
    Integer,
    /// Double-precision floating point number.
    Float,
    /// Arbitrary-precision decimal number.
    Decimal,
    /// Any numeric value; only ever requested, never stored.
    Number,
    /// Text.
    String,
    /// Nested sequence, materialised as a list view.
    ListView,
    /// Nested mapping, materialised as a map view.
    MapView,
}

impl ValueKind {
    /// Returns `true` for the kinds accepted by every numeric accessor.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Number => "number",
            Self::String => "string",
            Self::ListView => "list view",
            Self::MapView => "map view",
        })
    }
}

/// Numeric value returned by the `get_number` accessors.
///
/// The stored representation is kept as-is, so a decimal never loses
/// precision on its way out of a view.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Decimal value.
    Decimal(Decimal),
}

impl Number {
    /// Truncates toward zero, clamping to the `i64` range.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to integer casts saturate, which is the documented behaviour"
    )]
    pub fn to_i64(&self) -> i64 {
        match self {
            Self::Integer(value) => *value,
            Self::Float(value) => *value as i64,
            Self::Decimal(value) => value.to_i64_saturating(),
        }
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "widening integers to floats is part of the numeric accessor contract"
    )]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Decimal(value) => value.to_f64(),
        }
    }

    /// Converts to an exact decimal; `None` for non-finite floats.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Integer(value) => Some(Decimal::from(*value)),
            Self::Float(value) if value.is_finite() => format!("{value:e}").parse().ok(),
            Self::Float(_) => None,
            Self::Decimal(value) => Some(value.clone()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// Untyped value produced by an external parser.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RawValue {
    /// Absent or empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// High-precision decimal value.
    Decimal(Decimal),
    /// Text value.
    Text(String),
    /// Nested mapping.
    Map(BTreeMap<String, RawValue>),
    /// Nested sequence.
    List(Vec<RawValue>),
}

impl RawValue {
    /// Returns the kind this value has once wrapped by a view.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Text(_) => ValueKind::String,
            Self::Map(_) => ValueKind::MapView,
            Self::List(_) => ValueKind::ListView,
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(value: Vec<RawValue>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, RawValue>> for RawValue {
    fn from(value: BTreeMap<String, RawValue>) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// JSON numbers that fit `i64` become integers and every other number becomes
/// a decimal holding the literal's exact digits.
impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(flag) => Self::Bool(flag),
            Json::Number(number) => number.as_i64().map_or_else(
                || {
                    number.to_string().parse::<Decimal>().map_or_else(
                        |_| number.as_f64().map_or(Self::Null, Self::Float),
                        Self::Decimal,
                    )
                },
                Self::Integer,
            ),
            Json::String(text) => Self::Text(text),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Self::from(entry)))
                    .collect(),
            ),
        }
    }
}
