//! Merging bindings from several accessors into one deduplicated list.
//!
//! [`ServiceBindingMerger`] queries its accessors in the order they were
//! supplied, concatenates the results and drops every binding that an
//! [`EqualityComparer`] reports equal to a binding appearing earlier in the
//! concatenation. The first binding of each group of duplicates survives,
//! so the accessor order decides which duplicate is kept.
//!
//! ```
//! use std::sync::Arc;
//!
//! use service_bindings::{
//!     ServiceBinding, ServiceBindingAccessor, ServiceBindingKeys, ServiceBindingMerger,
//!     ServiceNameAndPlan, StaticServiceBindingAccessor,
//! };
//! use serde_json::json;
//!
//! let binding = |name: &str| {
//!     ServiceBinding::from_json(
//!         json!({"name": name, "label": "xsuaa", "plan": "application"}),
//!         ServiceBindingKeys::standard(),
//!     )
//! };
//! let primary: Arc<dyn ServiceBindingAccessor> =
//!     Arc::new(StaticServiceBindingAccessor::new([binding("primary")?]));
//! let fallback: Arc<dyn ServiceBindingAccessor> =
//!     Arc::new(StaticServiceBindingAccessor::new([binding("fallback")?]));
//!
//! let merger = ServiceBindingMerger::new([primary, fallback], ServiceNameAndPlan);
//! let merged = merger.get_service_bindings()?;
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].name(), Some("primary"));
//! # Ok::<_, service_bindings::BindingError>(())
//! ```

mod comparer;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

pub use comparer::{EqualityComparer, KeepEverything, ServiceNameAndPlan};

use crate::accessor::{AccessorOptions, ServiceBindingAccessor};
use crate::binding::ServiceBinding;
use crate::error::BindingResult;

/// Accessor combining several accessors under one equality notion.
///
/// The merger holds no mutable state; concurrent calls are independent.
#[derive(Clone)]
pub struct ServiceBindingMerger {
    accessors: Vec<Arc<dyn ServiceBindingAccessor>>,
    comparer: Arc<dyn EqualityComparer>,
}

impl ServiceBindingMerger {
    /// Merge `accessors`, in iteration order, deduplicating with `comparer`.
    #[must_use]
    pub fn new<I, C>(accessors: I, comparer: C) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ServiceBindingAccessor>>,
        C: EqualityComparer + 'static,
    {
        Self::with_comparer(accessors, Arc::new(comparer))
    }

    /// Like [`Self::new`], for a comparer that is already shared.
    #[must_use]
    pub fn with_comparer<I>(accessors: I, comparer: Arc<dyn EqualityComparer>) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ServiceBindingAccessor>>,
    {
        Self {
            accessors: accessors.into_iter().collect(),
            comparer,
        }
    }

    /// Returns the number of merged accessors.
    #[must_use]
    pub const fn accessor_count(&self) -> usize {
        self.accessors.len()
    }
}

impl fmt::Debug for ServiceBindingMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceBindingMerger")
            .field("accessors", &self.accessors.len())
            .finish_non_exhaustive()
    }
}

impl ServiceBindingAccessor for ServiceBindingMerger {
    /// Forwards `options` unchanged to every accessor. The first failing
    /// accessor fails the whole call.
    fn get_service_bindings_with(
        &self,
        options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        let mut candidates = Vec::new();
        for accessor in &self.accessors {
            candidates.extend(accessor.get_service_bindings_with(options)?);
        }
        let candidate_count = candidates.len();
        let merged = retain_first_occurrences(candidates, self.comparer.as_ref());
        debug!(
            accessors = self.accessors.len(),
            candidates = candidate_count,
            merged = merged.len(),
            "merged service bindings"
        );
        Ok(merged)
    }
}

/// Drops every candidate equal to one appearing strictly earlier.
///
/// Equality is caller-defined and not assumed to be hashable, so each
/// candidate is compared against all of its predecessors.
fn retain_first_occurrences(
    candidates: Vec<ServiceBinding>,
    comparer: &dyn EqualityComparer,
) -> Vec<ServiceBinding> {
    let keep: Vec<bool> = candidates
        .iter()
        .enumerate()
        .map(|(position, candidate)| {
            let duplicate = candidates
                .iter()
                .take(position)
                .any(|earlier| comparer.are_equal(earlier, candidate));
            if duplicate {
                trace!(
                    position,
                    service = candidate.service_name(),
                    plan = candidate.service_plan(),
                    "dropping duplicate service binding"
                );
            }
            !duplicate
        })
        .collect();

    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect()
}
