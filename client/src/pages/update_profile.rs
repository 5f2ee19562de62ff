//! Profile edit form.

#[cfg(test)]
#[path = "update_profile_test.rs"]
mod update_profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::profile::COUNTRY_ATTRIBUTE;
use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::types::{ProfileUpdate, USER_TYPE_ATTRIBUTE, UserProfile};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::route_guard::AppRoute;

/// Prefill from the fetched profile; missing attributes become empty.
pub(crate) fn form_from_profile(profile: &UserProfile) -> ProfileUpdate {
    let attr = |name: &str| profile.attribute(name).unwrap_or_default().to_owned();
    ProfileUpdate {
        email: attr("email"),
        family_name: attr("family_name"),
        given_name: attr("given_name"),
        address: attr("address"),
        gender: attr("gender"),
        birthdate: birthdate_only(&attr("birthdate")),
        country: attr(COUNTRY_ATTRIBUTE),
    }
}

/// `YYYY-MM-DD` prefix of a stored birthdate, which may carry a time.
pub(crate) fn birthdate_only(raw: &str) -> String {
    raw.trim().split(['T', ' ']).next().unwrap_or_default().to_owned()
}

type Getter = fn(&ProfileUpdate) -> String;
type Setter = fn(&mut ProfileUpdate, String);

#[component]
pub fn UpdateProfilePage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(ProfileUpdate::default());
    let identity = RwSignal::new((String::new(), String::new()));
    let saving = RwSignal::new(false);

    {
        let client = client.clone();
        Effect::new(move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.get_profile().await {
                    Ok(profile) => {
                        form.set(form_from_profile(&profile));
                        identity.set((
                            profile.username.clone().unwrap_or_else(|| "N/A".to_owned()),
                            profile.attribute(USER_TYPE_ATTRIBUTE).unwrap_or_default().to_owned(),
                        ));
                    }
                    Err(e) => {
                        log::warn!("update profile: {e}");
                        notify(notices, NoticeKind::Error, "Failed to fetch profile data");
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        let mut update = form.get();
        update.birthdate = birthdate_only(&update.birthdate);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.update_profile(&update).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Profile updated successfully!");
                    navigate(AppRoute::Profile.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("update profile: {e}");
                    notify(notices, NoticeKind::Error, "Failed to update profile");
                }
            }
            saving.set(false);
        });
    };

    let fields: [(&'static str, &'static str, Getter, Setter); 7] = [
        ("Email", "email", |f| f.email.clone(), |f, v| f.email = v),
        ("Address", "text", |f| f.address.clone(), |f, v| f.address = v),
        ("Family Name", "text", |f| f.family_name.clone(), |f, v| f.family_name = v),
        ("Given Name", "text", |f| f.given_name.clone(), |f, v| f.given_name = v),
        ("Gender", "text", |f| f.gender.clone(), |f, v| f.gender = v),
        ("Birthdate", "date", |f| f.birthdate.clone(), |f, v| f.birthdate = v),
        ("Country", "text", |f| f.country.clone(), |f, v| f.country = v),
    ];

    view! {
        <MainLayout title="Update Profile">
            <section class="profile">
                <div class="profile__identity">
                    <h3>{move || identity.get().0}</h3>
                    <span class="tag">{move || identity.get().1}</span>
                </div>
                <form class="profile__form" on:submit=on_submit>
                    {fields
                        .into_iter()
                        .map(|(label, kind, get, set)| {
                            view! {
                                <label class="profile__field">
                                    {label}
                                    <input
                                        type=kind
                                        prop:value=move || form.with(get)
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| set(f, value));
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <div class="profile__actions">
                        <a class="btn" href=AppRoute::Profile.path()>"Cancel"</a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </section>
        </MainLayout>
    }
}
