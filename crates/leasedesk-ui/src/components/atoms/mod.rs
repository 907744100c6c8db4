//! Shared UI atoms used across the panels.

pub(crate) mod icons;

pub(crate) use icons::Icon;
