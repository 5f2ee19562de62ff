//! Route guard wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected route renders through [`ProtectedRoute`]. The decision runs
//! in an effect that tracks the router's pathname and the session revision,
//! so it reruns in the browser on every location change (including
//! `/product/1` to `/product/2`, where the route stays mounted). Until it allows the view, only a
//! placeholder renders, so the page's data fetches never start for a
//! denied visitor.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::ConsoleClient;
use crate::state::session::SessionRevision;
use crate::util::route_guard::{AppRoute, GuardDecision, check_location};

#[component]
pub fn ProtectedRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let revision = expect_context::<SessionRevision>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        revision.track();
        let path = pathname.get();
        match check_location(&client.session().get(), &path, route) {
            GuardDecision::Render => allowed.set(true),
            GuardDecision::Redirect { to, reason } => {
                log::info!("guard: {path} denied ({reason:?}), redirecting to {to}");
                allowed.set(false);
                navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="guard-pending"></div> }
        >
            {children()}
        </Show>
    }
}
