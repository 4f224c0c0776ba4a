//! The accessor capability: anything that can produce service bindings.

mod options;

use std::sync::Arc;

pub use options::{AccessorOptions, AccessorOptionsBuilder};

use crate::binding::ServiceBinding;
use crate::error::BindingResult;

/// Source of service bindings.
///
/// Implementations read some environment-specific medium and turn it into
/// [`ServiceBinding`]s. Composite accessors such as
/// [`ServiceBindingMerger`](crate::ServiceBindingMerger) and
/// [`SimpleServiceBindingCache`](crate::SimpleServiceBindingCache) implement
/// the same trait, so they nest freely.
pub trait ServiceBindingAccessor: Send + Sync {
    /// Returns the bindings visible to this accessor.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BindingError`] when the bindings cannot be read.
    fn get_service_bindings_with(
        &self,
        options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>>;

    /// Returns the bindings visible to this accessor, without options.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BindingError`] when the bindings cannot be read.
    fn get_service_bindings(&self) -> BindingResult<Vec<ServiceBinding>> {
        self.get_service_bindings_with(AccessorOptions::none())
    }
}

impl<T: ServiceBindingAccessor + ?Sized> ServiceBindingAccessor for Arc<T> {
    fn get_service_bindings_with(
        &self,
        options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        (**self).get_service_bindings_with(options)
    }
}

/// Accessor serving a fixed list of bindings.
///
/// Useful for embedding bindings that are known up front, and for tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticServiceBindingAccessor {
    bindings: Vec<ServiceBinding>,
}

impl StaticServiceBindingAccessor {
    /// Serve `bindings` in the given order.
    #[must_use]
    pub fn new(bindings: impl IntoIterator<Item = ServiceBinding>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }
}

impl ServiceBindingAccessor for StaticServiceBindingAccessor {
    fn get_service_bindings_with(
        &self,
        _options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        Ok(self.bindings.clone())
    }
}
