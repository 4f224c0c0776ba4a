//! Service binding records.
//!
//! A [`ServiceBinding`] is an immutable property bag describing one bound
//! service, plus the keys that locate its well-known fields. Different
//! environments name those fields differently, so the keys travel with the
//! record rather than being hard-coded.

use crate::error::{BindingError, BindingResult};
use crate::view::{TypedListView, TypedMapView, Value};

/// Keys locating the well-known fields of a service binding.
///
/// `None` means the record has no such field.
///
/// ```
/// use service_bindings::ServiceBindingKeys;
///
/// let keys = ServiceBindingKeys {
///     service_name: Some("type".into()),
///     ..ServiceBindingKeys::standard()
/// };
/// assert_eq!(keys.service_plan.as_deref(), Some("plan"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceBindingKeys {
    /// Key of the binding's own name.
    pub name: Option<String>,
    /// Key of the name of the bound service.
    pub service_name: Option<String>,
    /// Key of the service plan.
    pub service_plan: Option<String>,
    /// Key of the list of tags.
    pub tags: Option<String>,
    /// Key of the credentials mapping.
    pub credentials: Option<String>,
}

impl ServiceBindingKeys {
    /// Keys used by Cloud Foundry style metadata:
    /// `name`, `label`, `plan`, `tags` and `credentials`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: Some("name".to_owned()),
            service_name: Some("label".to_owned()),
            service_plan: Some("plan".to_owned()),
            tags: Some("tags".to_owned()),
            credentials: Some("credentials".to_owned()),
        }
    }
}

/// One discovered service binding.
///
/// Equality compares the properties and the keys by value.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceBinding {
    properties: TypedMapView,
    keys: ServiceBindingKeys,
}

impl ServiceBinding {
    /// Builds a binding after checking that every configured key which is
    /// present in `properties` holds a value of the expected shape.
    ///
    /// Name, service name and plan must be text, tags a list of text and
    /// credentials a mapping. Keys absent from `properties`, and null
    /// entries, are accepted and read back as missing.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidBinding`] naming the first offending key.
    pub fn new(properties: TypedMapView, keys: ServiceBindingKeys) -> BindingResult<Self> {
        for key in [&keys.name, &keys.service_name, &keys.service_plan]
            .into_iter()
            .flatten()
        {
            check(&properties, key, |props| props.get_string(key).map(drop))?;
        }
        if let Some(key) = &keys.tags {
            check(&properties, key, |props| {
                let tags = props.get_list_view(key)?;
                (0..tags.get_size()).try_for_each(|index| tags.get_string(index).map(drop))
            })?;
        }
        if let Some(key) = &keys.credentials {
            check(&properties, key, |props| props.get_map_view(key).map(drop))?;
        }
        Ok(Self { properties, keys })
    }

    /// Builds a binding from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::ValueCast`] when `json` is not an object and
    /// [`BindingError::InvalidBinding`] as described for [`Self::new`].
    pub fn from_json(json: serde_json::Value, keys: ServiceBindingKeys) -> BindingResult<Self> {
        Self::new(TypedMapView::from_json(json)?, keys)
    }

    /// Returns every property of the binding.
    #[must_use]
    pub const fn properties(&self) -> &TypedMapView {
        &self.properties
    }

    /// Returns the keys locating the well-known fields.
    #[must_use]
    pub const fn keys(&self) -> &ServiceBindingKeys {
        &self.keys
    }

    /// Returns the binding's own name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text(self.keys.name.as_deref())
    }

    /// Returns the name of the bound service.
    #[must_use]
    pub fn service_name(&self) -> Option<&str> {
        self.text(self.keys.service_name.as_deref())
    }

    /// Returns the service plan.
    #[must_use]
    pub fn service_plan(&self) -> Option<&str> {
        self.text(self.keys.service_plan.as_deref())
    }

    /// Returns the tags, or an empty list when the binding has none.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.tags_view()
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the credentials mapping.
    #[must_use]
    pub fn credentials(&self) -> Option<&TypedMapView> {
        self.keys
            .credentials
            .as_deref()
            .and_then(|key| self.properties.get_map_view(key).ok())
    }

    /// Returns the raw list stored under the tags key, if any.
    #[must_use]
    pub fn tags_view(&self) -> Option<&TypedListView> {
        self.keys
            .tags
            .as_deref()
            .and_then(|key| self.properties.get_list_view(key).ok())
    }

    fn text(&self, key: Option<&str>) -> Option<&str> {
        key.and_then(|name| self.properties.get_string(name).ok())
    }
}

/// Runs `validate` when `key` holds a non-null value.
fn check(
    properties: &TypedMapView,
    key: &str,
    validate: impl FnOnce(&TypedMapView) -> BindingResult<()>,
) -> BindingResult<()> {
    match properties.get_or_null(key) {
        Ok(Some(_)) => validate(properties).map_err(|err| BindingError::invalid_binding(key, err)),
        Ok(None) | Err(_) => Ok(()),
    }
}
