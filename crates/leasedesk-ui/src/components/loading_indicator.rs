//! Spinner with an optional caption and an optional full-viewport overlay.
//!
//! # Design
//! - Tokens and flags come from [`LoadingView`]; this component only renders them.
//! - The spinner is always a polite status live region.

use crate::core::spinner::{
    DEFAULT_LOADING_TEXT, LoadingOptions, LoadingView, SpinnerColor, SpinnerSize,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingIndicatorProps {
    /// Spinner footprint; `md` by default.
    #[prop_or_default]
    pub size: SpinnerSize,
    /// Spinner hue; `blue` by default.
    #[prop_or_default]
    pub color: SpinnerColor,
    /// Render the caption under the spinner.
    #[prop_or(true)]
    pub show_text: bool,
    /// Caption copy.
    #[prop_or(AttrValue::from(DEFAULT_LOADING_TEXT))]
    pub text: AttrValue,
    /// Cover the viewport with a semi-opaque overlay.
    #[prop_or_default]
    pub full_screen: bool,
}

impl LoadingIndicatorProps {
    fn options(&self) -> LoadingOptions {
        LoadingOptions {
            size: self.size,
            color: self.color,
            show_text: self.show_text,
            text: self.text.to_string(),
            full_screen: self.full_screen,
        }
    }
}

#[function_component(LoadingIndicator)]
pub(crate) fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    let view = LoadingView::resolve(&props.options());
    let body = html! {
        <div class={view.body_class}>
            <div
                class={view.spinner_class}
                role={view.spinner_role}
                aria-live={view.spinner_live}
            />
            {view.caption.map(|caption| html! {
                <p class={caption.class}>{caption.text}</p>
            }).unwrap_or_default()}
        </div>
    };
    match view.overlay_class {
        Some(overlay) => html! { <div class={overlay}>{body}</div> },
        None => body,
    }
}
