//! Session configuration decoded from the host page.
//!
//! # Design
//! - The raw document is JSON; every field is optional.
//! - The role claim is resolved leniently (unknown claims are tenants).
//! - Unknown spinner keys fall back to their defaults one field at a time;
//!   the rest of the document is kept. Rejected keys are reported separately
//!   so the shell can log them.

use serde::Deserialize;
use thiserror::Error;

use super::ParseKeyError;
use super::role::Role;
use super::spinner::{SpinnerColor, SpinnerSize};

/// Transition screen duration when none is configured.
pub const DEFAULT_TRANSITION_MS: u32 = 400;

/// Errors raised while decoding session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for [`SessionConfig`].
    #[error("invalid session document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Spinner keys as written in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerDocument {
    /// Size key (`sm`, `md`, `lg`, `xl`).
    pub size: Option<String>,
    /// Colour key (`blue`, `indigo`, `green`, `purple`, `gray`).
    pub color: Option<String>,
}

/// Raw session document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Role claim for the signed-in viewer.
    pub role: Option<String>,
    /// Default spinner styling for loading states.
    pub spinner: SpinnerDocument,
    /// How long the route transition screen stays up, in milliseconds.
    pub transition_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role: None,
            spinner: SpinnerDocument::default(),
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

/// Resolved session settings consumed by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// Viewer role.
    pub role: Role,
    /// Spinner footprint for shell loading states.
    pub spinner_size: SpinnerSize,
    /// Spinner hue for shell loading states.
    pub spinner_color: SpinnerColor,
    /// Route transition duration in milliseconds.
    pub transition_ms: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            role: Role::default(),
            spinner_size: SpinnerSize::default(),
            spinner_color: SpinnerColor::default(),
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl SessionConfig {
    /// Decode a JSON session document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve the document into settings. Unknown spinner keys become
    /// `md`/`blue` without touching any other field.
    #[must_use]
    pub fn resolve(&self) -> SessionSettings {
        SessionSettings {
            role: Role::from_optional_claim(self.role.as_deref()),
            spinner_size: self
                .spinner
                .size
                .as_deref()
                .map_or_else(SpinnerSize::default, SpinnerSize::from_key),
            spinner_color: self
                .spinner
                .color
                .as_deref()
                .map_or_else(SpinnerColor::default, SpinnerColor::from_key),
            transition_ms: self.transition_ms,
        }
    }

    /// Spinner keys that [`SessionConfig::resolve`] replaced with defaults.
    #[must_use]
    pub fn rejected_keys(&self) -> Vec<ParseKeyError> {
        let size = self
            .spinner
            .size
            .as_deref()
            .and_then(|key| key.parse::<SpinnerSize>().err());
        let color = self
            .spinner
            .color
            .as_deref()
            .and_then(|key| key.parse::<SpinnerColor>().err());
        size.into_iter().chain(color).collect()
    }
}
