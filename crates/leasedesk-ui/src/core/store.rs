//! App-wide store reduced through yew's `use_reducer`.
//!
//! # Design
//! - Hold the resolved session in one slice so views read a single source.
//! - Route transitions are tracked as a flag the shell sets and a timer clears.

use std::rc::Rc;

use yew::Reducible;

use super::config::SessionSettings;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppStore {
    /// Resolved session settings.
    pub session: SessionSettings,
    /// Whether the route transition screen is showing.
    pub transitioning: bool,
}

/// Updates the shell dispatches against [`AppStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreAction {
    /// Replace the session settings.
    ApplySession(SessionSettings),
    /// A route change started.
    BeginTransition,
    /// The transition timer elapsed.
    EndTransition,
}

impl Reducible for AppStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoreAction::ApplySession(session) => next.session = session,
            StoreAction::BeginTransition => next.transitioning = true,
            StoreAction::EndTransition => next.transitioning = false,
        }
        Rc::new(next)
    }
}
