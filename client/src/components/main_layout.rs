//! Authenticated page chrome: side navigation, role badge, sign-out.

#[cfg(test)]
#[path = "main_layout_test.rs"]
mod main_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::error::ApiError;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::{Role, SessionRevision};
use crate::util::route_guard::{AppRoute, LOGIN_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: AppRoute,
}

/// Side-menu entries for `role`. Amenity management is landowner-only.
pub fn nav_items(role: Option<Role>) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { label: "Dashboard", route: AppRoute::Dashboard },
        NavItem { label: "Marketplace", route: AppRoute::Marketplace },
    ];
    if role == Some(Role::Landowner) {
        items.push(NavItem { label: "Amenities", route: AppRoute::Amenities });
    }
    items.push(NavItem { label: "Profile", route: AppRoute::Profile });
    items
}

/// Header badge, e.g. `LANDOWNER Account`.
pub fn role_badge(role: Option<Role>) -> String {
    match role {
        Some(role) => format!("{role} Account"),
        None => "Account".to_owned(),
    }
}

/// Notice shown after sign-out. The local session is gone either way; a
/// failed remote sign-out is reported instead of claimed as success.
pub fn sign_out_notice(result: &Result<(), ApiError>) -> (NoticeKind, &'static str) {
    match result {
        Ok(()) => (NoticeKind::Success, "You have been signed out."),
        Err(ApiError::SessionExpired) => (NoticeKind::Info, "Your session had already expired."),
        Err(_) => (
            NoticeKind::Info,
            "Signed out on this device. The server could not confirm the sign-out.",
        ),
    }
}

#[component]
pub fn MainLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let revision = expect_context::<SessionRevision>();
    let navigate = use_navigate();
    let collapsed = RwSignal::new(false);
    let confirming = RwSignal::new(false);

    let role = client.session().get().effective_role();

    let sign_out = {
        let client = client.clone();
        move |_: leptos::ev::MouseEvent| {
            confirming.set(false);
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = client.logout().await;
                if let Err(e) = &result {
                    log::warn!("sign-out: {e}");
                }
                let (kind, text) = sign_out_notice(&result);
                notify(notices, kind, text);
                revision.bump();
                navigate(LOGIN_PATH, NavigateOptions::default());
            });
        }
    };

    view! {
        <div class="layout" class:layout--collapsed=move || collapsed.get()>
            <nav class="layout__sider">
                <div class="layout__brand">
                    {move || if collapsed.get() { "PM" } else { "Property Manager" }}
                </div>
                <ul class="layout__menu">
                    {nav_items(role)
                        .into_iter()
                        .map(|item| view! {
                            <li><a href=item.route.path()>{item.label}</a></li>
                        })
                        .collect::<Vec<_>>()}
                    <li>
                        <button class="layout__logout" on:click=move |_| confirming.set(true)>
                            "Logout"
                        </button>
                    </li>
                </ul>
            </nav>
            <div class="layout__main">
                <header class="layout__header">
                    <button class="layout__toggle" on:click=move |_| collapsed.update(|c| *c = !*c)>
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                    <h1>{title}</h1>
                    <span class="layout__badge">{role_badge(role)}</span>
                    <a href=AppRoute::Profile.path() class="layout__profile">"Profile"</a>
                </header>
                <main class="layout__content">{children()}</main>
            </div>
            <Show when=move || confirming.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2>"Are you sure you want to sign out?"</h2>
                        <p>"You will need to log in again to access your dashboard."</p>
                        <div class="dialog__actions">
                            <button
                                class="btn"
                                on:click=move |_| {
                                    confirming.set(false);
                                    notify(notices, NoticeKind::Info, "Sign-out canceled.");
                                }
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=sign_out.clone()>
                                "Yes, Sign Out"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
