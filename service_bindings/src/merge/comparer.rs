//! Equality notions used to detect duplicate bindings.

use crate::binding::ServiceBinding;

/// Decides whether two bindings describe the same service.
///
/// The relation is caller-defined and need not be hash-compatible or even
/// transitive. Closures with the matching signature are comparers:
///
/// ```
/// use service_bindings::{EqualityComparer, ServiceBinding};
///
/// let same_name = |a: &ServiceBinding, b: &ServiceBinding| a.name() == b.name();
/// fn assert_comparer(_: &impl EqualityComparer) {}
/// assert_comparer(&same_name);
/// ```
pub trait EqualityComparer: Send + Sync {
    /// Returns `true` when `earlier` and `later` are duplicates.
    fn are_equal(&self, earlier: &ServiceBinding, later: &ServiceBinding) -> bool;
}

impl<F> EqualityComparer for F
where
    F: Fn(&ServiceBinding, &ServiceBinding) -> bool + Send + Sync,
{
    fn are_equal(&self, earlier: &ServiceBinding, later: &ServiceBinding) -> bool {
        self(earlier, later)
    }
}

/// Treats no two bindings as equal, not even a binding and itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeepEverything;

impl EqualityComparer for KeepEverything {
    fn are_equal(&self, _earlier: &ServiceBinding, _later: &ServiceBinding) -> bool {
        false
    }
}

/// Treats bindings with the same service name and the same plan as equal.
///
/// Missing fields compare equal to each other.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ServiceNameAndPlan;

impl EqualityComparer for ServiceNameAndPlan {
    fn are_equal(&self, earlier: &ServiceBinding, later: &ServiceBinding) -> bool {
        earlier.service_name() == later.service_name()
            && earlier.service_plan() == later.service_plan()
    }
}
