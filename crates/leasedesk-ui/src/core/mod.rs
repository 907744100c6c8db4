//! Core, DOM-free primitives and helpers for the dashboard UI.
pub mod actions;
pub mod config;
pub mod role;
pub mod spinner;
pub mod store;
pub mod transition;

use thiserror::Error;

/// Raised when a strictly-parsed key is outside its accepted set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {field} `{value}`")]
pub struct ParseKeyError {
    /// Name of the key being parsed (e.g. `size`).
    pub field: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseKeyError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}
