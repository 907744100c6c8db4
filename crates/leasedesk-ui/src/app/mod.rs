use crate::components::action_panel::{ActionPanel, diagnostic_handlers};
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::route_transition::RouteTransitionScreen;
use crate::core::actions::ActionKind;
use crate::core::store::{AppStore, StoreAction};
use gloo_timers::callback::Timeout;
use preferences::load_session;
use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;
mod routes;

#[function_component(LeaseDeskApp)]
pub(crate) fn leasedesk_app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let store = use_reducer(AppStore::default);
    let session = store.session;
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigator = use_navigator();
    let transition_timer = use_mut_ref(|| None as Option<Timeout>);

    {
        let dispatcher = store.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(StoreAction::ApplySession(load_session()));
                || ()
            },
            (),
        );
    }

    {
        let dispatcher = store.dispatcher();
        let transition_timer = transition_timer.clone();
        let duration = session.transition_ms;
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(StoreAction::BeginTransition);
                *transition_timer.borrow_mut() = Some(Timeout::new(duration, move || {
                    dispatcher.dispatch(StoreAction::EndTransition);
                }));
                || ()
            },
            route.clone(),
        );
    }

    if store.transitioning {
        return html! { <RouteTransitionScreen /> };
    }

    let open_reports = Callback::from(move |()| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Reports);
        }
    });
    let handlers = diagnostic_handlers()
        .with(ActionKind::ViewReports, open_reports.clone())
        .with(ActionKind::GenerateReport, open_reports);

    match route {
        Route::Dashboard => html! {
            <main class="mx-auto max-w-3xl space-y-6 p-6">
                <header class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"Dashboard"}</h1>
                    <span class="text-sm text-gray-500">{session.role.as_str()}</span>
                </header>
                <ActionPanel role={AttrValue::from(session.role.as_str())} handlers={handlers} />
            </main>
        },
        Route::Reports => html! {
            <main class="mx-auto max-w-3xl space-y-6 p-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Reports"}</h1>
                <LoadingIndicator
                    size={session.spinner_size}
                    color={session.spinner_color}
                    text={AttrValue::from("Loading reports...")}
                />
                <Link<Route> to={Route::Dashboard} classes="text-sm text-blue-600">
                    {"Back to dashboard"}
                </Link<Route>>
            </main>
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
    }
}

/// Mount the dashboard into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LeaseDeskApp>::with_root(root).render();
    } else {
        yew::Renderer::<LeaseDeskApp>::new().render();
    }
}
