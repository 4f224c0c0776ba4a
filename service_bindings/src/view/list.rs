//! Fixed-size, index-addressed view over a sequence of values.

use std::sync::Arc;

use crate::error::{BindingError, BindingResult, ValueLocation};
use crate::value::{Number, ValueKind};

use super::{TypedMapView, Value, read};

/// Read-only, typed view over an ordered sequence.
///
/// Cloning is cheap: clones share the same backing storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedListView {
    items: Arc<[Value]>,
}

impl TypedListView {
    /// Wraps `items`, materialising nested mappings and sequences as views.
    ///
    /// Anything convertible into a [`Value`] is accepted: raw values,
    /// primitives and views that were built elsewhere.
    #[must_use]
    pub fn from_raw_list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Wraps a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::ValueCast`] when `json` is not an array.
    pub fn from_json(json: serde_json::Value) -> BindingResult<Self> {
        match Value::from(json) {
            Value::List(view) => Ok(view),
            other => Err(BindingError::value_cast(
                ValueKind::ListView,
                other.kind(),
                ValueLocation::Root,
            )),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn get_size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the view holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the stored values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the value at `index` as stored.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] when `index >= get_size()`.
    pub fn get(&self, index: usize) -> BindingResult<&Value> {
        self.items
            .get(index)
            .ok_or(BindingError::IndexOutOfRange {
                index,
                size: self.items.len(),
            })
    }

    /// Returns the value at `index`, mapping the null marker to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] when `index >= get_size()`.
    pub fn get_or_null(&self, index: usize) -> BindingResult<Option<&Value>> {
        self.get(index)
            .map(|value| (!value.is_null()).then_some(value))
    }

    fn typed<'a, T>(
        &'a self,
        index: usize,
        requested: ValueKind,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> BindingResult<T> {
        read(
            self.get(index)?,
            requested,
            || ValueLocation::Index(index),
            extract,
        )
    }

    /// Reads a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is a boolean.
    pub fn get_boolean(&self, index: usize) -> BindingResult<bool> {
        self.typed(index, ValueKind::Boolean, Value::as_bool)
    }

    /// Reads any numeric element as an integer, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is numeric.
    pub fn get_integer(&self, index: usize) -> BindingResult<i64> {
        self.typed(index, ValueKind::Integer, Value::as_i64)
    }

    /// Reads any numeric element as a float.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is numeric.
    pub fn get_double(&self, index: usize) -> BindingResult<f64> {
        self.typed(index, ValueKind::Float, Value::as_f64)
    }

    /// Reads any numeric element without losing precision.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is numeric.
    pub fn get_number(&self, index: usize) -> BindingResult<Number> {
        self.typed(index, ValueKind::Number, Value::as_number)
    }

    /// Reads a text element.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is text.
    pub fn get_string(&self, index: usize) -> BindingResult<&str> {
        self.typed(index, ValueKind::String, Value::as_str)
    }

    /// Reads a nested list view.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is a list view.
    pub fn get_list_view(&self, index: usize) -> BindingResult<&Self> {
        self.typed(index, ValueKind::ListView, Value::as_list_view)
    }

    /// Reads a nested map view.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] for a bad index and
    /// [`BindingError::ValueCast`] unless the element is a map view.
    pub fn get_map_view(&self, index: usize) -> BindingResult<&TypedMapView> {
        self.typed(index, ValueKind::MapView, Value::as_map_view)
    }
}

impl<'a> IntoIterator for &'a TypedListView {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
