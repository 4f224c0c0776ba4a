//! Opaque options forwarded to service binding accessors.

use std::collections::BTreeMap;

use serde_json::Value;

static NO_OPTIONS: AccessorOptions = AccessorOptions {
    options: BTreeMap::new(),
};

/// Named options handed to [`ServiceBindingAccessor`](super::ServiceBindingAccessor)s.
///
/// Composite accessors never inspect the options; they forward the same
/// reference to every accessor they wrap.
///
/// ```
/// use service_bindings::AccessorOptions;
///
/// let options = AccessorOptions::builder().with_option("foo", "bar").build();
/// assert_eq!(options.get("foo"), Some(&serde_json::json!("bar")));
/// assert!(AccessorOptions::none().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessorOptions {
    options: BTreeMap<String, Value>,
}

impl AccessorOptions {
    /// Shared instance carrying no options.
    #[must_use]
    pub fn none() -> &'static Self {
        &NO_OPTIONS
    }

    /// Start building a set of options.
    #[must_use]
    pub fn builder() -> AccessorOptionsBuilder {
        AccessorOptionsBuilder::default()
    }

    /// Returns the option stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Returns the option names in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Returns `true` when no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Builder for [`AccessorOptions`].
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct AccessorOptionsBuilder {
    options: BTreeMap<String, Value>,
}

impl AccessorOptionsBuilder {
    /// Set `key` to `value`, replacing an earlier value for the same key.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> AccessorOptions {
        AccessorOptions {
            options: self.options,
        }
    }
}
