//! Login page: username + password, then token verification.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::error::ApiError;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::SessionRevision;
use crate::util::route_guard::AppRoute;

/// Trimmed username and raw password, both required.
pub(crate) fn login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Please input your username!");
    }
    if password.is_empty() {
        return Err("Please input your password!");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Notice text for a failed login.
pub(crate) fn login_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Verification(_) => "Token verification failed. Please login again.",
        _ => "Login failed. Please try again.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let revision = expect_context::<SessionRevision>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match login_input(&username.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match client.login(&user, &pass).await {
                Ok(_) => {
                    notify(notices, NoticeKind::Success, "Login successful!");
                    revision.bump();
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    notify(notices, NoticeKind::Error, login_failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging In..." } else { "Log In" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path()>"Signup Now!"</a>
                </p>
            </div>
        </div>
    }
}
