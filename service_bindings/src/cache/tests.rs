//! Unit tests for the memoizing accessor.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]
#![expect(
    clippy::needless_pass_by_value,
    reason = "rstest injects fixtures and cases by value"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use serde_json::json;

use super::SimpleServiceBindingCache;
use crate::accessor::{AccessorOptions, ServiceBindingAccessor};
use crate::binding::{ServiceBinding, ServiceBindingKeys};
use crate::error::{BindingError, BindingResult};

/// Counts calls and fails while `failures` is non-zero.
#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
    failures: AtomicUsize,
}

impl ServiceBindingAccessor for Counting {
    fn get_service_bindings_with(
        &self,
        _options: &AccessorOptions,
    ) -> BindingResult<Vec<ServiceBinding>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
        {
            return Err(BindingError::accessor_failure("counting", "transient"));
        }
        let binding = ServiceBinding::from_json(
            json!({"name": format!("call-{call}")}),
            ServiceBindingKeys::standard(),
        )?;
        Ok(vec![binding])
    }
}

#[fixture]
fn counting() -> Arc<Counting> {
    Arc::new(Counting::default())
}

fn first_name(bindings: &[ServiceBinding]) -> Option<String> {
    bindings.first().and_then(ServiceBinding::name).map(str::to_owned)
}

#[rstest]
fn computes_once(counting: Arc<Counting>) -> Result<()> {
    let cache = SimpleServiceBindingCache::from_shared(counting.clone());

    let first = cache.get_service_bindings()?;
    let second = cache.get_service_bindings()?;

    ensure!(first == second, "cached snapshot changed between calls");
    ensure!(counting.calls.load(Ordering::SeqCst) == 1, "delegate called more than once");
    Ok(())
}

#[rstest]
fn ignores_options_once_filled(counting: Arc<Counting>) -> Result<()> {
    let cache = SimpleServiceBindingCache::from_shared(counting.clone());
    let options = AccessorOptions::builder().with_option("foo", "bar").build();

    cache.get_service_bindings()?;
    cache.get_service_bindings_with(&options)?;

    ensure!(counting.calls.load(Ordering::SeqCst) == 1, "options bypassed the cache");
    Ok(())
}

#[rstest]
fn invalidate_forces_recomputation(counting: Arc<Counting>) -> Result<()> {
    let cache = SimpleServiceBindingCache::from_shared(counting.clone());

    let first = cache.get_service_bindings()?;
    cache.invalidate();
    ensure!(!cache.is_populated(), "invalidate kept the snapshot");
    let second = cache.get_service_bindings()?;

    ensure!(first_name(&first).as_deref() == Some("call-0"));
    ensure!(first_name(&second).as_deref() == Some("call-1"));
    ensure!(counting.calls.load(Ordering::SeqCst) == 2);
    Ok(())
}

#[rstest]
fn failures_are_not_cached(counting: Arc<Counting>) -> Result<()> {
    counting.failures.store(1, Ordering::SeqCst);
    let cache = SimpleServiceBindingCache::from_shared(counting.clone());

    let Err(err) = cache.get_service_bindings() else {
        anyhow::bail!("first call should fail");
    };
    ensure!(matches!(err, BindingError::Source { .. }), "unexpected error: {err}");
    ensure!(!cache.is_populated(), "failure was cached");

    let bindings = cache.get_service_bindings()?;
    ensure!(first_name(&bindings).as_deref() == Some("call-1"));
    ensure!(cache.is_populated());
    Ok(())
}

#[rstest]
fn concurrent_first_calls_compute_once(counting: Arc<Counting>) {
    let cache = SimpleServiceBindingCache::from_shared(counting.clone());

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let bindings = cache
                    .get_service_bindings()
                    .expect("cache should serve bindings");
                assert_eq!(first_name(&bindings).as_deref(), Some("call-0"));
            });
        }
    });

    assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
}
