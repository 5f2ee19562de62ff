//! Signup page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::error::ApiError;
use crate::net::types::SignupRequest;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::Role;
use crate::util::route_guard::AppRoute;

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub gender: String,
    pub your_name: String,
    pub family_name: String,
    pub address: String,
    pub birthdate: String,
    pub country: String,
    pub user_type: Option<Role>,
}

impl SignupForm {
    pub(crate) fn to_request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
            email: self.email.trim().to_owned(),
            gender: self.gender.clone(),
            given_name: self.your_name.trim().to_owned(),
            family_name: self.family_name.trim().to_owned(),
            address: self.address.trim().to_owned(),
            birthdate: self.birthdate.trim().to_owned(),
            country: self.country.clone(),
            user_type: self.user_type.map(Role::as_str).unwrap_or_default().to_owned(),
        }
    }
}

/// Server message when it sent one; otherwise the account most likely exists.
pub(crate) fn signup_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Status { .. } => "User already exists".to_owned(),
        other => other.user_message(),
    }
}

/// Success notice; the server message is appended when present.
pub(crate) fn signup_success_message(server: &str) -> String {
    if server.is_empty() { "Signup successful".to_owned() } else { format!("Signup successful: {server}") }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let request = form.get().to_request();
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.signup(&request).await {
                Ok(msg) => {
                    notify(notices, NoticeKind::Success, signup_success_message(&msg));
                    navigate(AppRoute::Login.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    notify(notices, NoticeKind::Error, signup_failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Signup"</h1>
                <form class="signup-form" on:submit=on_submit>
                    {text_field(form, "Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {text_field(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field(form, "Gender", "text", |f| f.gender.clone(), |f, v| f.gender = v)}
                    {text_field(form, "Your Name", "text", |f| f.your_name.clone(), |f, v| f.your_name = v)}
                    {text_field(form, "Family Name", "text", |f| f.family_name.clone(), |f, v| f.family_name = v)}
                    {text_field(form, "Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                    {text_field(form, "Birthdate", "date", |f| f.birthdate.clone(), |f, v| f.birthdate = v)}
                    {text_field(form, "Country", "text", |f| f.country.clone(), |f, v| f.country = v)}
                    <label class="signup-label">
                        "User Type"
                        <select
                            class="signup-input"
                            on:change=move |ev| {
                                let role = event_target_value(&ev).parse::<Role>().ok();
                                form.update(|f| f.user_type = role);
                            }
                        >
                            <option value="">"Select user type"</option>
                            {Role::ALL
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {text_field(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    <button class="signup-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="signup-card__footer">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}

fn text_field(
    form: RwSignal<SignupForm>,
    label: &'static str,
    kind: &'static str,
    get: fn(&SignupForm) -> String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <label class="signup-label">
            {label}
            <input
                class="signup-input"
                type=kind
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}
