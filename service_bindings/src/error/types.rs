//! Primary error enum for view access and binding gathering.

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

/// Position of a value inside a typed view.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ValueLocation {
    /// The value handed to a view constructor itself.
    Root,
    /// Zero-based position inside a list view.
    Index(usize),
    /// Key inside a map view.
    Key(String),
}

impl fmt::Display for ValueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root value"),
            Self::Index(index) => write!(f, "index {index}"),
            Self::Key(key) => write!(f, "key '{key}'"),
        }
    }
}

/// Errors that can occur while reading views or gathering service bindings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindingError {
    /// The stored value does not have the requested type.
    #[error("cannot read {location} as {requested}: stored value is {actual}")]
    ValueCast {
        /// Type the caller asked for.
        requested: ValueKind,
        /// Type actually stored.
        actual: ValueKind,
        /// Where the value lives inside its view.
        location: ValueLocation,
    },

    /// A map view has no entry for the key.
    #[error("no value stored under key '{key}'")]
    NotFound {
        /// Key that was looked up.
        key: String,
    },

    /// A list view index lies outside `[0, size)`.
    #[error("index {index} is out of range for a list view of size {size}")]
    IndexOutOfRange {
        /// Index that was looked up.
        index: usize,
        /// Number of elements in the list view.
        size: usize,
    },

    /// A service binding property located by one of its keys has the wrong shape.
    #[error("service binding property '{key}' is malformed: {source}")]
    InvalidBinding {
        /// Property key that failed validation.
        key: String,
        /// Underlying cast failure.
        #[source]
        source: Box<BindingError>,
    },

    /// A service binding accessor failed to produce its bindings.
    #[error("service binding accessor '{accessor}' failed: {source}")]
    Source {
        /// Name of the failing accessor.
        accessor: String,
        /// Error reported by the accessor.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration for the default accessor could not be extracted.
    #[error("failed to load service binding configuration: {0}")]
    Configuration(#[from] Box<figment::Error>),
}
