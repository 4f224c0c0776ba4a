//! Key-addressed view over a mapping of values.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::Arc;

use crate::error::{BindingError, BindingResult, ValueLocation};
use crate::value::{Number, ValueKind};

use super::{TypedListView, Value, read};

/// Read-only, typed view over a mapping with unique text keys.
///
/// Keys enumerate in ascending order. Cloning is cheap: clones share the
/// same backing storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedMapView {
    entries: Arc<BTreeMap<String, Value>>,
}

impl TypedMapView {
    /// Wraps `entries`, materialising nested mappings and sequences as views.
    ///
    /// When a key repeats, the last entry wins.
    #[must_use]
    pub fn from_raw_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            entries: Arc::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Wraps a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::ValueCast`] when `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> BindingResult<Self> {
        match Value::from(json) {
            Value::Map(view) => Ok(view),
            other => Err(BindingError::value_cast(
                ValueKind::MapView,
                other.kind(),
                ValueLocation::Root,
            )),
        }
    }

    /// Returns every key in ascending order.
    #[must_use]
    pub fn get_keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns `true` when `key` has an entry, even a null one.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the view holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] when `key` has no entry.
    pub fn get(&self, key: &str) -> BindingResult<&Value> {
        self.entries.get(key).ok_or_else(|| BindingError::NotFound {
            key: key.to_owned(),
        })
    }

    /// Returns the value stored under `key`, mapping the null marker to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] when `key` has no entry.
    pub fn get_or_null(&self, key: &str) -> BindingResult<Option<&Value>> {
        self.get(key).map(|value| (!value.is_null()).then_some(value))
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        requested: ValueKind,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> BindingResult<T> {
        read(
            self.get(key)?,
            requested,
            || ValueLocation::Key(key.to_owned()),
            extract,
        )
    }

    /// Reads a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is a boolean.
    pub fn get_boolean(&self, key: &str) -> BindingResult<bool> {
        self.typed(key, ValueKind::Boolean, Value::as_bool)
    }

    /// Reads any numeric entry as an integer, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is numeric.
    pub fn get_integer(&self, key: &str) -> BindingResult<i64> {
        self.typed(key, ValueKind::Integer, Value::as_i64)
    }

    /// Reads any numeric entry as a float.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is numeric.
    pub fn get_double(&self, key: &str) -> BindingResult<f64> {
        self.typed(key, ValueKind::Float, Value::as_f64)
    }

    /// Reads any numeric entry without losing precision.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is numeric.
    pub fn get_number(&self, key: &str) -> BindingResult<Number> {
        self.typed(key, ValueKind::Number, Value::as_number)
    }

    /// Reads a text entry.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is text.
    pub fn get_string(&self, key: &str) -> BindingResult<&str> {
        self.typed(key, ValueKind::String, Value::as_str)
    }

    /// Reads a nested list view.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is a list view.
    pub fn get_list_view(&self, key: &str) -> BindingResult<&TypedListView> {
        self.typed(key, ValueKind::ListView, Value::as_list_view)
    }

    /// Reads a nested map view.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NotFound`] for a missing key and
    /// [`BindingError::ValueCast`] unless the entry is a map view.
    pub fn get_map_view(&self, key: &str) -> BindingResult<&Self> {
        self.typed(key, ValueKind::MapView, Value::as_map_view)
    }
}

impl<'a> IntoIterator for &'a TypedMapView {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
