//! Test helpers shared across crates.
//!
//! This crate provides binding factories, instrumented accessors and
//! `figment::Jail` wrappers for configuration tests.

pub mod accessors;
pub mod bindings;
pub mod figment;

pub use accessors::{FailingAccessor, RecordingAccessor};
pub use bindings::{binding, binding_keys};
