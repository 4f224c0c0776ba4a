//! Helpers for running configuration tests inside a `figment::Jail`.
//!
//! The jail snapshots the process environment and restores it afterwards,
//! so tests can set `SERVICE_BINDINGS_*` variables without leaking them into
//! other tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The closure works with `anyhow::Result`, so crate errors propagate with
/// `?`. Jail failures and closure errors are both reported as
/// `anyhow::Error`.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j).map_err(|err| figment::Error::from(err.to_string()))?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Sets the configuration variable `SERVICE_BINDINGS_<suffix>` inside `jail`.
pub fn set_config_var(jail: &mut figment::Jail, suffix: &str, value: &str) {
    jail.set_env(format!("{}{suffix}", service_bindings::ENV_PREFIX), value);
}
