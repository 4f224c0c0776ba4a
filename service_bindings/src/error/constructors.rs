//! Constructors and classification helpers for `BindingError`.

use crate::value::ValueKind;

use super::{BindingError, ValueLocation};

impl BindingError {
    /// Construct a cast failure for the value at `location`.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_bindings::{BindingError, ValueKind, ValueLocation};
    ///
    /// let err = BindingError::value_cast(ValueKind::Boolean, ValueKind::String, ValueLocation::Index(0));
    /// assert!(err.is_value_cast());
    /// assert_eq!(err.to_string(), "cannot read index 0 as boolean: stored value is string");
    /// ```
    #[must_use]
    pub const fn value_cast(
        requested: ValueKind,
        actual: ValueKind,
        location: ValueLocation,
    ) -> Self {
        Self::ValueCast {
            requested,
            actual,
            location,
        }
    }

    /// Construct a source failure attributed to `accessor`.
    #[must_use]
    pub fn accessor_failure<E>(accessor: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Source {
            accessor: accessor.into(),
            source: source.into(),
        }
    }

    /// Construct a configuration failure from a [`figment::Error`].
    #[must_use]
    pub fn configuration(source: figment::Error) -> Self {
        Self::Configuration(Box::new(source))
    }

    /// Wrap a view failure raised while validating the binding property `key`.
    #[must_use]
    pub fn invalid_binding(key: impl Into<String>, source: Self) -> Self {
        Self::InvalidBinding {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Returns `true` for type mismatches, the only recoverable view failure.
    #[must_use]
    pub const fn is_value_cast(&self) -> bool {
        matches!(self, Self::ValueCast { .. })
    }

    /// Returns `true` for missing keys and out-of-range indices.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::IndexOutOfRange { .. })
    }
}
