//! Typed access to service bindings gathered from pluggable sources.
//!
//! A [`ServiceBinding`] describes one service instance an application is
//! bound to: a name, the service it belongs to, a plan, tags and
//! credentials. Bindings are produced by [`ServiceBindingAccessor`]s. Several
//! accessors can be combined with a [`ServiceBindingMerger`], memoized with a
//! [`SimpleServiceBindingCache`], and published process-wide through
//! [`DefaultServiceBindingAccessor`].
//!
//! Binding properties are exposed as read-only [`TypedMapView`]s and
//! [`TypedListView`]s whose typed getters report mismatches as
//! [`BindingError::ValueCast`] instead of panicking.
//!
//! ```
//! use service_bindings::{ServiceBinding, ServiceBindingKeys};
//! use serde_json::json;
//!
//! let binding = ServiceBinding::from_json(
//!     json!({
//!         "name": "my-xsuaa",
//!         "label": "xsuaa",
//!         "plan": "application",
//!         "tags": ["xsuaa"],
//!         "credentials": {"clientid": "sb-app", "port": 8080}
//!     }),
//!     ServiceBindingKeys::standard(),
//! )?;
//!
//! assert_eq!(binding.service_name(), Some("xsuaa"));
//! let credentials = binding.credentials().expect("credentials are present");
//! assert_eq!(credentials.get_string("clientid")?, "sb-app");
//! assert_eq!(credentials.get_double("port")?, 8080.0);
//! # Ok::<_, service_bindings::BindingError>(())
//! ```

mod accessor;
mod binding;
mod cache;
mod config;
mod default_accessor;
mod discovery;
mod error;
mod merge;
mod result_ext;
mod value;
mod view;

#[doc(hidden)]
pub use inventory;

pub use accessor::{
    AccessorOptions, AccessorOptionsBuilder, ServiceBindingAccessor, StaticServiceBindingAccessor,
};
pub use binding::{ServiceBinding, ServiceBindingKeys};
pub use cache::SimpleServiceBindingCache;
pub use config::{ComparerKind, DefaultAccessorConfig, ENV_PREFIX};
pub use default_accessor::DefaultServiceBindingAccessor;
pub use discovery::{
    AccessorFactory, AccessorRegistration, AccessorRegistry, FixedRegistry, InventoryRegistry,
};
pub use error::{BindingError, BindingResult, ValueLocation};
pub use merge::{EqualityComparer, KeepEverything, ServiceBindingMerger, ServiceNameAndPlan};
pub use result_ext::{ConfigResultExt, SourceResultExt};
pub use value::{Decimal, Number, ParseDecimalError, RawValue, ValueKind};
pub use view::{TypedListView, TypedMapView, Value};
