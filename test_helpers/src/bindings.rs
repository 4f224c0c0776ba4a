//! Factories for service bindings used as test data.

use serde_json::json;
use service_bindings::{ServiceBinding, ServiceBindingKeys};
use uuid::Uuid;

/// Keys under which [`binding`] stores its fields.
///
/// The name lives under `id`, the service name under `type` and the plan
/// under `plan`; tags and credentials are unset.
#[must_use]
pub fn binding_keys() -> ServiceBindingKeys {
    ServiceBindingKeys {
        name: Some("id".to_owned()),
        service_name: Some("type".to_owned()),
        service_plan: Some("plan".to_owned()),
        ..ServiceBindingKeys::default()
    }
}

/// Builds a binding for `service` on `plan` with a unique random name.
///
/// Two calls never yield equal bindings, so tests can tell duplicates apart
/// by name even when service and plan match.
///
/// # Examples
///
/// ```
/// use service_bindings_test_helpers::binding;
///
/// let first = binding("xsuaa", "lite");
/// let second = binding("xsuaa", "lite");
/// assert_eq!(first.service_plan(), Some("lite"));
/// assert_ne!(first.name(), second.name());
/// ```
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "the literal properties always satisfy the binding keys"
)]
pub fn binding(service: &str, plan: &str) -> ServiceBinding {
    let properties = json!({
        "id": Uuid::new_v4().to_string(),
        "type": service,
        "plan": plan,
    });
    ServiceBinding::from_json(properties, binding_keys()).expect("string fields are well formed")
}
