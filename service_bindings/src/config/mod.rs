//! Configuration of the default accessor.
//!
//! Values come from the built-in defaults overlaid with environment
//! variables prefixed by [`ENV_PREFIX`]:
//!
//! - `SERVICE_BINDINGS_COMPARER`: `keep_everything` or `service_name_and_plan`.
//! - `SERVICE_BINDINGS_CACHE`: `true` or `false`.

use std::sync::Arc;

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::BindingResult;
use crate::merge::{EqualityComparer, KeepEverything, ServiceNameAndPlan};
use crate::result_ext::ConfigResultExt;

/// Prefix of the environment variables read by [`DefaultAccessorConfig::load`].
pub const ENV_PREFIX: &str = "SERVICE_BINDINGS_";

/// Selects one of the predefined equality comparers.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparerKind {
    /// [`KeepEverything`]: no deduplication.
    #[default]
    KeepEverything,
    /// [`ServiceNameAndPlan`]: one binding per service name and plan.
    ServiceNameAndPlan,
}

impl ComparerKind {
    /// Returns the comparer this kind selects.
    #[must_use]
    pub fn comparer(self) -> Arc<dyn EqualityComparer> {
        match self {
            Self::KeepEverything => Arc::new(KeepEverything),
            Self::ServiceNameAndPlan => Arc::new(ServiceNameAndPlan),
        }
    }
}

/// Settings for composing the default accessor.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DefaultAccessorConfig {
    /// Comparer used to merge discovered accessors.
    pub comparer: ComparerKind,
    /// Whether the merged result is memoized.
    pub cache: bool,
}

impl Default for DefaultAccessorConfig {
    fn default() -> Self {
        Self {
            comparer: ComparerKind::default(),
            cache: true,
        }
    }
}

impl DefaultAccessorConfig {
    /// Returns the figment layering the defaults under the environment.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BindingError::Configuration`] when a variable holds
    /// an unusable value.
    pub fn load() -> BindingResult<Self> {
        Self::load_from(&Self::figment())
    }

    /// Extract the configuration from a caller-built figment.
    ///
    /// Keys missing from `figment` take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BindingError::Configuration`] when extraction fails.
    pub fn load_from(figment: &Figment) -> BindingResult<Self> {
        figment.extract::<Self>().into_binding_config()
    }
}
