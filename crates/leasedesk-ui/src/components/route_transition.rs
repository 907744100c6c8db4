//! Full-page loading screen shown while a route changes.
//!
//! # Design
//! - Embeds a default, inline loading indicator above a two-line copy block.
//! - Only the heading is caller-controlled; the sentence beneath is fixed.

use crate::components::loading_indicator::LoadingIndicator;
use crate::core::transition::{DEFAULT_TRANSITION_MESSAGE, TransitionCopy};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RouteTransitionProps {
    /// Heading shown under the spinner.
    #[prop_or(AttrValue::from(DEFAULT_TRANSITION_MESSAGE))]
    pub message: AttrValue,
    /// Accepted for callers that pass it; rendering does not read it.
    #[allow(dead_code)]
    #[prop_or(true)]
    pub show_progress: bool,
}

#[function_component(RouteTransitionScreen)]
pub(crate) fn route_transition_screen(props: &RouteTransitionProps) -> Html {
    let copy = TransitionCopy::new(props.message.to_string());
    let spinner = TransitionCopy::spinner();
    html! {
        <div class="fixed inset-0 flex items-center justify-center bg-gray-50">
            <div class="flex flex-col items-center gap-6 text-center">
                <LoadingIndicator
                    size={spinner.size}
                    color={spinner.color}
                    show_text={spinner.show_text}
                    full_screen={spinner.full_screen}
                />
                <div class="space-y-2">
                    <h2 class="text-xl font-semibold text-gray-900">{copy.heading}</h2>
                    <p class="text-sm text-gray-500">{copy.detail}</p>
                </div>
            </div>
        </div>
    }
}
