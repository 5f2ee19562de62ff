//! Read-only profile view.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::types::{USER_TYPE_ATTRIBUTE, UserProfile};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::route_guard::AppRoute;

pub(crate) const COUNTRY_ATTRIBUTE: &str = "custom:country";

/// Attribute value, `N/A` when missing or blank.
pub(crate) fn attribute_or_na(profile: &UserProfile, name: &str) -> String {
    profile
        .attribute(name)
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A")
        .to_owned()
}

/// Labelled rows shown under the username.
pub(crate) fn profile_rows(profile: &UserProfile) -> Vec<(&'static str, String)> {
    [
        ("Email", "email"),
        ("Address", "address"),
        ("Family Name", "family_name"),
        ("Given Name", "given_name"),
        ("Gender", "gender"),
        ("Birthdate", "birthdate"),
        ("Country", COUNTRY_ATTRIBUTE),
    ]
    .into_iter()
    .map(|(label, attr)| (label, attribute_or_na(profile, attr)))
    .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let profile = RwSignal::new(None::<UserProfile>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.get_profile().await {
                Ok(found) => profile.set(Some(found)),
                Err(e) => {
                    log::warn!("profile: {e}");
                    notify(notices, NoticeKind::Error, "Failed to fetch profile data");
                }
            }
            loading.set(false);
        });
    });

    view! {
        <MainLayout title="Profile">
            <section class="profile">
                <div class="profile__header">
                    <h2>"Profile"</h2>
                    <a class="btn btn--primary" href=AppRoute::UpdateProfile.path()>"Edit Profile"</a>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="spinner">"Loading..."</div> }
                >
                    {move || {
                        profile
                            .get()
                            .map(|p| {
                                view! {
                                    <div class="profile__identity">
                                        <h3>{p.username.clone().unwrap_or_else(|| "N/A".to_owned())}</h3>
                                        <span class="tag">{attribute_or_na(&p, USER_TYPE_ATTRIBUTE)}</span>
                                    </div>
                                    <dl class="profile__rows">
                                        {profile_rows(&p)
                                            .into_iter()
                                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                            .collect_view()}
                                    </dl>
                                }
                            })
                    }}
                </Show>
            </section>
        </MainLayout>
    }
}
