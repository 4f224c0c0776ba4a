//! Extensions for mapping foreign errors into `BindingResult` concisely.
//!
//! Accessor implementations usually call into I/O or parsing code with its
//! own error types. These helpers replace repetitive
//! `.map_err(|e| BindingError::…)` chains.
//!
//! - Use [`SourceResultExt::for_accessor`] inside a
//!   [`ServiceBindingAccessor`](crate::ServiceBindingAccessor) to attribute a
//!   failure to the accessor that raised it.
//! - Use [`ConfigResultExt::into_binding_config`] for `figment::Error`
//!   results produced while extracting configuration.
//!
//! # Examples
//!
//! ```
//! use service_bindings::{BindingResult, SourceResultExt};
//!
//! fn read_port(raw: &str) -> BindingResult<u16> {
//!     raw.parse::<u16>().for_accessor("vcap")
//! }
//!
//! assert_eq!(read_port("8080").ok(), Some(8080));
//! assert!(read_port("http").is_err());
//! ```

use crate::{BindingError, BindingResult};

/// Maps any boxable error into [`BindingError::Source`].
pub trait SourceResultExt<T> {
    /// Convert `Result<T, E>` into `BindingResult<T>`, naming the accessor.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`BindingError::Source`].
    fn for_accessor(self, accessor: &str) -> BindingResult<T>;
}

impl<T, E> SourceResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn for_accessor(self, accessor: &str) -> BindingResult<T> {
        self.map_err(|err| BindingError::accessor_failure(accessor, err))
    }
}

/// Extension tailored to mapping `figment::Error` into a configuration failure.
pub trait ConfigResultExt<T> {
    /// Convert `Result<T, figment::Error>` into `BindingResult<T>` as a
    /// [`BindingError::Configuration`].
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Configuration`] when the input is `Err`.
    fn into_binding_config(self) -> BindingResult<T>;
}

impl<T> ConfigResultExt<T> for Result<T, figment::Error> {
    fn into_binding_config(self) -> BindingResult<T> {
        self.map_err(BindingError::configuration)
    }
}
