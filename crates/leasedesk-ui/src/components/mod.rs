pub(crate) mod action_panel;
pub(crate) mod atoms;
pub(crate) mod loading_indicator;
pub(crate) mod route_transition;
