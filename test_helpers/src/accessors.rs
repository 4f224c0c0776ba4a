//! Instrumented accessors for exercising composite accessors.

use parking_lot::Mutex;
use service_bindings::{
    AccessorOptions, BindingError, BindingResult, ServiceBinding, ServiceBindingAccessor,
};

/// Accessor serving fixed bindings while recording every call.
///
/// Each call records the address of the options it received, so tests can
/// assert that a composite forwarded the very same options instance.
#[derive(Debug, Default)]
pub struct RecordingAccessor {
    bindings: Vec<ServiceBinding>,
    calls: Mutex<Vec<usize>>,
}

impl RecordingAccessor {
    /// Serve `bindings` in the given order.
    #[must_use]
    pub fn new(bindings: impl IntoIterator<Item = ServiceBinding>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns how often the accessor was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns `true` when the accessor was called exactly once, with the
    /// `options` instance itself rather than an equal copy.
    #[must_use]
    pub fn was_called_once_with(&self, options: &AccessorOptions) -> bool {
        let address = std::ptr::from_ref(options).addr();
        self.calls.lock().as_slice() == [address]
    }
}

impl ServiceBindingAccessor for RecordingAccessor {
    fn get_service_bindings_with(
        &self,
        options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        self.calls.lock().push(std::ptr::from_ref(options).addr());
        Ok(self.bindings.clone())
    }
}

/// Accessor that always fails with [`BindingError::Source`].
#[derive(Clone, Debug)]
pub struct FailingAccessor {
    message: String,
}

impl FailingAccessor {
    /// Name the accessor reports in its errors.
    pub const NAME: &'static str = "failing";

    /// Fail every call with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ServiceBindingAccessor for FailingAccessor {
    fn get_service_bindings_with(
        &self,
        _options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        Err(BindingError::accessor_failure(
            Self::NAME,
            self.message.clone(),
        ))
    }
}
