//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_bar::NoticeBar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::ConsoleClient;
use crate::net::config::{API_BASE_META, AUTH_BASE_META, ApiConfig};
use crate::net::http::{ApiClient, DefaultTransport};
use crate::pages::{
    add_property::AddPropertyPage, amenities::AmenitiesPage, dashboard::DashboardPage, login::LoginPage,
    marketplace::MarketplacePage, product_details::ProductDetailsPage, profile::ProfilePage, signup::SignupPage,
    update_profile::UpdateProfilePage,
};
use crate::state::notice::NoticeState;
use crate::state::session::{SESSION_KEYS, SessionRevision};
use crate::util::expiry::ExpiryRedirect;
use crate::util::route_guard::AppRoute;
use crate::util::storage::{DefaultStorage, watch_external_changes};

/// HTML shell rendered on the server for SSR + hydration. `api` is exposed
/// to the browser through `<meta>` tags.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let ApiConfig { api_base_url: api_base, auth_base_url: auth_base } = api;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <meta name=AUTH_BASE_META content=auth_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notice queue, the session revision, and the API client, then
/// sets up client-side routing with every protected page behind
/// [`ProtectedRoute`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    let revision = SessionRevision::new();
    let client: ConsoleClient =
        ApiClient::new(ApiConfig::detect(), DefaultTransport::default(), DefaultStorage::default())
            .with_expiry_handler(ExpiryRedirect::new(notices));

    provide_context(notices);
    provide_context(revision);
    provide_context(client);

    // Another tab logged in or out: re-run the guard.
    watch_external_changes(SESSION_KEYS, move || revision.bump());

    view! {
        <Stylesheet id="leptos" href="/pkg/estate-console.css"/>
        <Title text="Property Manager"/>
        <NoticeBar/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute route=AppRoute::Dashboard><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("marketplace")
                    view=|| view! { <ProtectedRoute route=AppRoute::Marketplace><MarketplacePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("addmarketplace")
                    view=|| view! { <ProtectedRoute route=AppRoute::AddMarketplace><AddPropertyPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("product"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute route=AppRoute::ProductDetails><ProductDetailsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("amentics")
                    view=|| view! { <ProtectedRoute route=AppRoute::Amenities><AmenitiesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute route=AppRoute::Profile><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("updateprofile")
                    view=|| view! { <ProtectedRoute route=AppRoute::UpdateProfile><UpdateProfilePage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
