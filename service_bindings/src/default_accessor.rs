//! Process-wide default accessor.
//!
//! The instance is composed lazily on first use: every accessor known to the
//! [`InventoryRegistry`] is merged under the configured comparer, and the
//! merged result is cached unless configuration disables caching. Callers may
//! replace the instance at any time, or reset it to a freshly composed
//! default.
//!
//! Accessor factories run while the instance lock is held, so a factory must
//! not call back into [`DefaultServiceBindingAccessor`].

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard, const_rwlock};
use tracing::{debug, warn};

use crate::accessor::ServiceBindingAccessor;
use crate::cache::SimpleServiceBindingCache;
use crate::config::DefaultAccessorConfig;
use crate::discovery::{AccessorRegistry, InventoryRegistry};
use crate::merge::ServiceBindingMerger;

/// Empty until first read or first replacement.
static INSTANCE: RwLock<Option<Arc<dyn ServiceBindingAccessor>>> = const_rwlock(None);

/// Holder of the process-wide [`ServiceBindingAccessor`].
///
/// This type has no values; it only groups the functions managing the
/// shared instance.
///
/// ```
/// use std::sync::Arc;
///
/// use service_bindings::{
///     DefaultServiceBindingAccessor, ServiceBindingAccessor, StaticServiceBindingAccessor,
/// };
///
/// let custom: Arc<dyn ServiceBindingAccessor> = Arc::new(StaticServiceBindingAccessor::default());
/// DefaultServiceBindingAccessor::set_instance(Some(Arc::clone(&custom)));
/// assert!(Arc::ptr_eq(&DefaultServiceBindingAccessor::get_instance(), &custom));
///
/// DefaultServiceBindingAccessor::set_instance(None);
/// assert!(!Arc::ptr_eq(&DefaultServiceBindingAccessor::get_instance(), &custom));
/// ```
#[derive(Debug)]
pub enum DefaultServiceBindingAccessor {}

impl DefaultServiceBindingAccessor {
    /// Returns the current process-wide accessor.
    ///
    /// Concurrent callers read in parallel and never observe a partially
    /// replaced instance.
    #[must_use]
    pub fn get_instance() -> Arc<dyn ServiceBindingAccessor> {
        if let Some(current) = INSTANCE.read().as_ref() {
            return Arc::clone(current);
        }

        let guard = INSTANCE.upgradable_read();
        if let Some(current) = guard.as_ref() {
            return Arc::clone(current);
        }
        let composed = Self::new_default_instance();
        let mut writer = RwLockUpgradableReadGuard::upgrade(guard);
        *writer = Some(Arc::clone(&composed));
        composed
    }

    /// Replace the process-wide accessor.
    ///
    /// `None` composes a new default instance: discovery runs again and any
    /// cached bindings are dropped. Each registered factory runs once per
    /// reset, even when the instance was never read before.
    pub fn set_instance(accessor: Option<Arc<dyn ServiceBindingAccessor>>) {
        let mut current = INSTANCE.write();
        *current = Some(accessor.map_or_else(
            || {
                debug!("resetting default service binding accessor");
                Self::new_default_instance()
            },
            |custom| {
                debug!("replacing default service binding accessor");
                custom
            },
        ));
    }

    /// Compose a default accessor from linked registrations and the
    /// environment configuration.
    ///
    /// Unusable configuration is logged and replaced by the built-in
    /// defaults.
    #[must_use]
    pub fn new_default_instance() -> Arc<dyn ServiceBindingAccessor> {
        let config = DefaultAccessorConfig::load().unwrap_or_else(|err| {
            warn!(error = %err, "using default service binding configuration");
            DefaultAccessorConfig::default()
        });
        Self::compose(&InventoryRegistry, &config)
    }

    /// Merge the accessors discovered by `registry` as `config` describes.
    #[must_use]
    pub fn compose(
        registry: &dyn AccessorRegistry,
        config: &DefaultAccessorConfig,
    ) -> Arc<dyn ServiceBindingAccessor> {
        let accessors = registry.discover();
        debug!(
            accessors = accessors.len(),
            comparer = ?config.comparer,
            cache = config.cache,
            "composing default service binding accessor"
        );
        let merger = ServiceBindingMerger::with_comparer(accessors, config.comparer.comparer());
        if config.cache {
            Arc::new(SimpleServiceBindingCache::new(merger))
        } else {
            Arc::new(merger)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Composition tests; the shared instance is covered by integration tests.
    #![allow(
        unfulfilled_lint_expectations,
        reason = "clippy::expect_used is denied globally; tests may not hit those branches"
    )]
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface fixture mistakes"
    )]

    use std::sync::Arc;

    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_json::json;

    use super::DefaultServiceBindingAccessor;
    use crate::accessor::{ServiceBindingAccessor, StaticServiceBindingAccessor};
    use crate::binding::{ServiceBinding, ServiceBindingKeys};
    use crate::config::{ComparerKind, DefaultAccessorConfig};
    use crate::discovery::FixedRegistry;

    fn source(service: &str, plan: &str) -> Arc<dyn ServiceBindingAccessor> {
        let binding = ServiceBinding::from_json(
            json!({"label": service, "plan": plan}),
            ServiceBindingKeys::standard(),
        )
        .expect("fixture binding is well formed");
        Arc::new(StaticServiceBindingAccessor::new([binding]))
    }

    #[rstest]
    #[case(ComparerKind::KeepEverything, 2)]
    #[case(ComparerKind::ServiceNameAndPlan, 1)]
    fn compose_merges_with_configured_comparer(
        #[case] comparer: ComparerKind,
        #[case] expected: usize,
        #[values(true, false)] cache: bool,
    ) -> Result<()> {
        let registry = FixedRegistry::new([source("xsuaa", "lite"), source("xsuaa", "lite")]);
        let config = DefaultAccessorConfig { comparer, cache };

        let accessor = DefaultServiceBindingAccessor::compose(&registry, &config);

        ensure!(accessor.get_service_bindings()?.len() == expected);
        Ok(())
    }

    #[test]
    fn compose_with_empty_registry_yields_no_bindings() -> Result<()> {
        let accessor = DefaultServiceBindingAccessor::compose(
            &FixedRegistry::default(),
            &DefaultAccessorConfig::default(),
        );
        ensure!(accessor.get_service_bindings()?.is_empty());
        Ok(())
    }
}
