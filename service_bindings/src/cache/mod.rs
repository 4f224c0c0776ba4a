//! Memoizing accessor wrapper.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::debug;

use crate::accessor::{AccessorOptions, ServiceBindingAccessor};
use crate::binding::ServiceBinding;
use crate::error::BindingResult;

/// Accessor that computes its delegate's bindings once and then serves that
/// snapshot.
///
/// The first call fills the snapshot using the options it was given; later
/// calls return the snapshot regardless of their options until
/// [`invalidate`](Self::invalidate) is called. A failing delegate leaves the
/// cache empty, so the next call retries.
///
/// ```
/// use service_bindings::{
///     ServiceBindingAccessor, SimpleServiceBindingCache, StaticServiceBindingAccessor,
/// };
///
/// let cache = SimpleServiceBindingCache::new(StaticServiceBindingAccessor::default());
/// assert!(!cache.is_populated());
/// assert!(cache.get_service_bindings()?.is_empty());
/// assert!(cache.is_populated());
/// # Ok::<_, service_bindings::BindingError>(())
/// ```
pub struct SimpleServiceBindingCache {
    delegate: Arc<dyn ServiceBindingAccessor>,
    snapshot: RwLock<Option<Arc<[ServiceBinding]>>>,
}

impl SimpleServiceBindingCache {
    /// Cache the bindings of `delegate`.
    #[must_use]
    pub fn new(delegate: impl ServiceBindingAccessor + 'static) -> Self {
        Self::from_shared(Arc::new(delegate))
    }

    /// Cache the bindings of an accessor that is shared elsewhere.
    #[must_use]
    pub const fn from_shared(delegate: Arc<dyn ServiceBindingAccessor>) -> Self {
        Self {
            delegate,
            snapshot: RwLock::new(None),
        }
    }

    /// Discard the snapshot; the next call queries the delegate again.
    pub fn invalidate(&self) {
        if self.snapshot.write().take().is_some() {
            debug!("service binding cache invalidated");
        }
    }

    /// Returns `true` when a snapshot is held.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.snapshot.read().is_some()
    }
}

impl fmt::Debug for SimpleServiceBindingCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleServiceBindingCache")
            .field("populated", &self.is_populated())
            .finish_non_exhaustive()
    }
}

impl ServiceBindingAccessor for SimpleServiceBindingCache {
    fn get_service_bindings_with(
        &self,
        options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        if let Some(snapshot) = self.snapshot.read().as_ref() {
            return Ok(snapshot.to_vec());
        }

        // Only one upgradable guard exists at a time, so concurrent first
        // calls queue here and find the snapshot filled.
        let guard = self.snapshot.upgradable_read();
        if let Some(snapshot) = guard.as_ref() {
            return Ok(snapshot.to_vec());
        }
        let bindings = self.delegate.get_service_bindings_with(options)?;
        let mut writer = RwLockUpgradableReadGuard::upgrade(guard);
        debug!(bindings = bindings.len(), "service binding cache filled");
        *writer = Some(Arc::from(bindings.as_slice()));
        Ok(bindings)
    }
}

#[cfg(test)]
mod tests;
