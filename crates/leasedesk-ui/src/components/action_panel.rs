//! Role-dependent quick actions grid.
//!
//! # Design
//! - The role claim picks one fixed table; unknown claims get the tenant table.
//! - Button behaviour is injected; the default handlers only log the action.

use crate::components::atoms::Icon;
use crate::core::actions::{ActionHandlers, ActionKind, actions_for_claim};
use gloo::console;
use yew::prelude::*;

/// Fallback that records which action was triggered.
pub(crate) fn diagnostic_handlers() -> ActionHandlers {
    ActionHandlers::new(Callback::from(|kind: ActionKind| {
        console::log!("quick action triggered", kind.label());
    }))
}

#[derive(Properties, PartialEq)]
pub(crate) struct ActionPanelProps {
    /// Raw role claim for the viewer.
    #[prop_or_default]
    pub role: AttrValue,
    #[prop_or_else(diagnostic_handlers)]
    pub handlers: ActionHandlers,
    #[prop_or(AttrValue::from("Quick Actions"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ActionPanel)]
pub(crate) fn action_panel(props: &ActionPanelProps) -> Html {
    let actions = actions_for_claim(&props.role, &props.handlers);
    html! {
        <section class={classes!("rounded-xl", "bg-white", "p-6", "shadow-sm", props.class.clone())}>
            <h2 class="mb-4 text-lg font-semibold text-gray-900">{props.title.clone()}</h2>
            <div class="grid grid-cols-2 gap-4">
                {for actions.into_iter().map(|action| {
                    let handler = action.handler.clone();
                    let onclick = Callback::from(move |_: MouseEvent| handler.emit(()));
                    html! {
                        <button
                            key={action.label}
                            type="button"
                            class="flex flex-col items-center justify-center gap-2 rounded-lg border border-gray-200 p-4 text-sm font-medium text-gray-700 transition-colors hover:bg-gray-50"
                            onclick={onclick}
                        >
                            <Icon kind={action.icon} class="text-blue-600" />
                            <span>{action.label}</span>
                        </button>
                    }
                })}
            </div>
        </section>
    }
}
