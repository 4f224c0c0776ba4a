//! Error types produced while reading views and gathering bindings.

mod constructors;
mod types;

pub use types::{BindingError, ValueLocation};

/// Result alias used throughout the crate.
pub type BindingResult<T> = Result<T, BindingError>;
