//! Session loading for the app shell.

use crate::core::config::{SessionConfig, SessionSettings};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const SESSION_KEY: &str = "leasedesk.session";

pub(crate) fn load_session() -> SessionSettings {
    let raw = match LocalStorage::raw().get_item(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SessionSettings::default(),
        Err(err) => {
            console::error!("session storage unavailable", SESSION_KEY, err);
            return SessionSettings::default();
        }
    };
    let config = match SessionConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("session config unreadable", SESSION_KEY, err.to_string());
            return SessionSettings::default();
        }
    };
    for rejected in config.rejected_keys() {
        console::error!("session key replaced by default", rejected.to_string());
    }
    config.resolve()
}
