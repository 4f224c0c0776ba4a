//! Accessor discovery via link-time registration.
//!
//! Crates providing an accessor register a factory with
//! [`register_accessor!`](crate::register_accessor); every linked
//! registration becomes visible through [`InventoryRegistry`]. The default
//! accessor sees registrations only through the [`AccessorRegistry`] trait,
//! so tests and embedders can inject an explicit list with
//! [`FixedRegistry`].

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::accessor::ServiceBindingAccessor;

/// Factory producing a fresh accessor instance.
pub type AccessorFactory = fn() -> Arc<dyn ServiceBindingAccessor>;

/// Static registration entry collected via `inventory`.
pub struct AccessorRegistration {
    name: &'static str,
    crate_name: &'static str,
    factory: AccessorFactory,
}

impl AccessorRegistration {
    /// Describe the accessor `name`, defined in `crate_name`, built by `factory`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        crate_name: &'static str,
        factory: AccessorFactory,
    ) -> Self {
        Self {
            name,
            crate_name,
            factory,
        }
    }

    /// Returns the registered name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name of the crate that registered the accessor.
    #[must_use]
    pub const fn crate_name(&self) -> &'static str {
        self.crate_name
    }

    /// Build a new accessor instance.
    #[must_use]
    pub fn instantiate(&self) -> Arc<dyn ServiceBindingAccessor> {
        (self.factory)()
    }
}

impl fmt::Debug for AccessorRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorRegistration")
            .field("name", &self.name)
            .field("crate_name", &self.crate_name)
            .finish_non_exhaustive()
    }
}

inventory::collect!(AccessorRegistration);

/// Register a [`ServiceBindingAccessor`] factory for discovery.
///
/// The factory is any non-capturing function returning
/// `Arc<dyn ServiceBindingAccessor>`. It runs each time the default accessor
/// is composed.
///
/// ```
/// use std::sync::Arc;
///
/// use service_bindings::{ServiceBindingAccessor, StaticServiceBindingAccessor};
///
/// fn empty() -> Arc<dyn ServiceBindingAccessor> {
///     Arc::new(StaticServiceBindingAccessor::default())
/// }
///
/// service_bindings::register_accessor!("empty", empty);
/// ```
#[macro_export]
macro_rules! register_accessor {
    ($name:expr, $factory:expr $(,)?) => {
        $crate::inventory::submit! {
            $crate::AccessorRegistration::new(
                $name,
                env!("CARGO_PKG_NAME"),
                $factory,
            )
        }
    };
}

/// Supplies the accessors the default accessor merges.
pub trait AccessorRegistry: Send + Sync {
    /// Instantiate every known accessor, in a stable order.
    fn discover(&self) -> Vec<Arc<dyn ServiceBindingAccessor>>;
}

/// Registry backed by [`register_accessor!`](crate::register_accessor)
/// submissions.
///
/// Link order is unspecified, so registrations are instantiated sorted by
/// name, then by crate name.
#[derive(Clone, Copy, Debug, Default)]
pub struct InventoryRegistry;

impl InventoryRegistry {
    /// Returns every linked registration in discovery order.
    #[must_use]
    pub fn registrations() -> Vec<&'static AccessorRegistration> {
        let mut registrations: Vec<_> = inventory::iter::<AccessorRegistration>
            .into_iter()
            .collect();
        registrations.sort_by_key(|reg| (reg.name, reg.crate_name));
        registrations
    }
}

impl AccessorRegistry for InventoryRegistry {
    fn discover(&self) -> Vec<Arc<dyn ServiceBindingAccessor>> {
        Self::registrations()
            .into_iter()
            .map(|reg| {
                debug!(
                    accessor = reg.name,
                    crate_name = reg.crate_name,
                    "instantiating registered service binding accessor"
                );
                reg.instantiate()
            })
            .collect()
    }
}

/// Registry serving an explicit list of accessors.
#[derive(Clone, Default)]
pub struct FixedRegistry {
    accessors: Vec<Arc<dyn ServiceBindingAccessor>>,
}

impl FixedRegistry {
    /// Serve `accessors` in the given order.
    #[must_use]
    pub fn new(accessors: impl IntoIterator<Item = Arc<dyn ServiceBindingAccessor>>) -> Self {
        Self {
            accessors: accessors.into_iter().collect(),
        }
    }
}

impl fmt::Debug for FixedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedRegistry")
            .field("accessors", &self.accessors.len())
            .finish()
    }
}

impl AccessorRegistry for FixedRegistry {
    fn discover(&self) -> Vec<Arc<dyn ServiceBindingAccessor>> {
        self.accessors.clone()
    }
}
