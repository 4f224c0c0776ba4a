//! Values as stored inside typed views.

use crate::value::{Decimal, Number, RawValue, ValueKind};

use super::{TypedListView, TypedMapView};

/// A view element: a primitive, the null marker, or a nested view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Explicit null marker for absent values.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Decimal value.
    Decimal(Decimal),
    /// Text value.
    Text(String),
    /// Nested sequence.
    List(TypedListView),
    /// Nested mapping.
    Map(TypedMapView),
}

impl Value {
    /// Returns the kind of the stored value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Text(_) => ValueKind::String,
            Self::List(_) => ValueKind::ListView,
            Self::Map(_) => ValueKind::MapView,
        }
    }

    /// Returns `true` for the null marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns any numeric value, keeping its representation.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(value) => Some(Number::Integer(*value)),
            Self::Float(value) => Some(Number::Float(*value)),
            Self::Decimal(value) => Some(Number::Decimal(value.clone())),
            _ => None,
        }
    }

    /// Returns any numeric value truncated to an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().map(|number| number.to_i64())
    }

    /// Returns any numeric value as a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|number| number.to_f64())
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the nested list view, if this is one.
    #[must_use]
    pub const fn as_list_view(&self) -> Option<&TypedListView> {
        match self {
            Self::List(view) => Some(view),
            _ => None,
        }
    }

    /// Returns the nested map view, if this is one.
    #[must_use]
    pub const fn as_map_view(&self) -> Option<&TypedMapView> {
        match self {
            Self::Map(view) => Some(view),
            _ => None,
        }
    }
}

/// Nested mappings and sequences become views; everything else passes through.
impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Null => Self::Null,
            RawValue::Bool(flag) => Self::Bool(flag),
            RawValue::Integer(value) => Self::Integer(value),
            RawValue::Float(value) => Self::Float(value),
            RawValue::Decimal(value) => Self::Decimal(value),
            RawValue::Text(text) => Self::Text(text),
            RawValue::Map(entries) => Self::Map(TypedMapView::from_raw_map(entries)),
            RawValue::List(items) => Self::List(TypedListView::from_raw_list(items)),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        RawValue::from(value).into()
    }
}

impl From<TypedListView> for Value {
    fn from(view: TypedListView) -> Self {
        Self::List(view)
    }
}

impl From<TypedMapView> for Value {
    fn from(view: TypedMapView) -> Self {
        Self::Map(view)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
