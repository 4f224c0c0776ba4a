//! Typed, read-only views over untyped value trees.
//!
//! [`TypedListView`] and [`TypedMapView`] wrap sequences and mappings of
//! [`RawValue`](crate::RawValue)s. Nested mappings and sequences are wrapped
//! eagerly at construction, so every nested structure is reachable through
//! the `get_map_view`/`get_list_view` accessors.
//!
//! Each accessor targets one type. A mismatch is reported as
//! [`BindingError::ValueCast`]; it is never turned into an absent value. The
//! only implicit conversion is numeric widening: integers, floats and
//! decimals satisfy `get_integer`, `get_double` and `get_number` alike.
//!
//! ```
//! use service_bindings::{BindingError, TypedListView};
//! use serde_json::json;
//!
//! let view = TypedListView::from_json(json!([true, 42, {"Key": "Value"}]))?;
//! assert!(view.get_boolean(0)?);
//! assert!((view.get_double(1)? - 42.0).abs() < f64::EPSILON);
//! assert_eq!(view.get_map_view(2)?.get_keys(), vec!["Key"]);
//! assert!(matches!(view.get_string(0), Err(BindingError::ValueCast { .. })));
//! # Ok::<_, BindingError>(())
//! ```

mod list;
mod map;
mod value;

pub use list::TypedListView;
pub use map::TypedMapView;
pub use value::Value;

use crate::error::{BindingError, BindingResult, ValueLocation};
use crate::value::ValueKind;

/// Applies `extract` to `value`, reporting a cast failure when it declines.
fn read<'a, T>(
    value: &'a Value,
    requested: ValueKind,
    location: impl FnOnce() -> ValueLocation,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> BindingResult<T> {
    extract(value)
        .ok_or_else(|| BindingError::value_cast(requested, value.kind(), location()))
}

#[cfg(test)]
mod tests;
