//! Dashboard: role-specific contact-request feed.
//!
//! Landowners see requests addressed to them and can accept or reject each
//! one; investors see what they have sent. Scouts have no feed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::error::ApiError;
use crate::net::types::{ContactRequest, Person, RequestStatus};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::Role;

const MESSAGE_PREVIEW_CHARS: usize = 100;

/// Which request listing a role gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RequestFeed {
    /// Addressed to the landowner; actionable.
    Incoming,
    /// Sent by the investor; read-only.
    Sent,
}

impl RequestFeed {
    pub(crate) fn for_role(role: Option<Role>) -> Option<Self> {
        match role? {
            Role::Landowner => Some(Self::Incoming),
            Role::Investor => Some(Self::Sent),
            Role::Scout => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Incoming => "Requests for your properties",
            Self::Sent => "Your contact requests",
        }
    }

    fn failure_notice(self) -> &'static str {
        match self {
            Self::Incoming => "Failed to fetch landowner requests",
            Self::Sent => "Failed to fetch contact requests",
        }
    }

    async fn fetch(self, client: &ConsoleClient) -> Result<Vec<ContactRequest>, ApiError> {
        match self {
            Self::Incoming => client.landowner_requests().await,
            Self::Sent => client.contact_requests().await,
        }
    }
}

/// Per-status tallies for the summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestCounts {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl RequestCounts {
    pub(crate) fn tally(requests: &[ContactRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                RequestStatus::Pending => acc.pending += 1,
                RequestStatus::Accepted => acc.accepted += 1,
                RequestStatus::Rejected => acc.rejected += 1,
                RequestStatus::Unknown => {}
            }
            acc
        })
    }
}

/// First `limit` characters followed by `...` when the message is longer.
pub(crate) fn truncate_message(message: &str, limit: usize) -> String {
    if message.chars().count() > limit {
        let head: String = message.chars().take(limit).collect();
        format!("{head}...")
    } else {
        message.to_owned()
    }
}

pub(crate) fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "tag tag--pending",
        RequestStatus::Accepted => "tag tag--accepted",
        RequestStatus::Rejected => "tag tag--rejected",
        RequestStatus::Unknown => "tag",
    }
}

/// `First (email)` for a counterpart, `N/A` when missing.
pub(crate) fn person_label(person: Option<&Person>) -> String {
    let Some(person) = person else {
        return "N/A".to_owned();
    };
    let name = person.display_name();
    match person.email.as_deref() {
        Some(email) if name.is_empty() => email.to_owned(),
        Some(email) => format!("{name} ({email})"),
        None if name.is_empty() => "N/A".to_owned(),
        None => name,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let feed = RequestFeed::for_role(client.session().get().effective_role());
    let requests = RwSignal::new(Vec::<ContactRequest>::new());
    let loading = RwSignal::new(false);
    let selected = RwSignal::new(None::<ContactRequest>);

    let load = {
        let client = client.clone();
        Callback::new(move |()| {
            let Some(feed) = feed else {
                return;
            };
            loading.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match feed.fetch(&client).await {
                    Ok(list) => requests.set(list),
                    Err(e) => {
                        log::warn!("dashboard: {e}");
                        notify(notices, NoticeKind::Error, feed.failure_notice());
                    }
                }
                loading.set(false);
            });
        })
    };
    Effect::new(move || load.run(()));

    let decide = Callback::new(move |status: RequestStatus| {
        let Some(request) = selected.get_untracked() else {
            return;
        };
        loading.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.update_request_status(request.id, status).await {
                Ok(()) => notify(notices, NoticeKind::Success, format!("Request has been {}!", status.as_str())),
                Err(e) => {
                    log::warn!("dashboard: status change failed: {e}");
                    notify(notices, NoticeKind::Error, "Failed to update request status.");
                }
            }
            selected.set(None);
            load.run(());
        });
    });

    let counts = move || RequestCounts::tally(&requests.get());

    view! {
        <MainLayout title="Dashboard">
            <div class="dashboard">
                <div class="dashboard__stats">
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Requests"</span>
                        <span class="stat-card__value">{move || counts().total}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Pending"</span>
                        <span class="stat-card__value">{move || counts().pending}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Accepted"</span>
                        <span class="stat-card__value">{move || counts().accepted}</span>
                    </div>
                </div>
                {match feed {
                    None => view! {
                        <p class="dashboard__empty">"No requests to show for your account type."</p>
                    }
                    .into_any(),
                    Some(feed) => view! {
                        <section class="dashboard__feed">
                            <h2>{feed.title()}</h2>
                            <Show when=move || loading.get()>
                                <div class="spinner">"Loading..."</div>
                            </Show>
                            <table class="requests-table">
                                <thead>
                                    <tr>
                                        <th>{if feed == RequestFeed::Incoming { "Owner" } else { "Sender" }}</th>
                                        <th>"Product"</th>
                                        <th>"Message"</th>
                                        <th>"Status"</th>
                                        <th>"Date"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        requests
                                            .get()
                                            .into_iter()
                                            .map(|r| request_row(feed, r, selected))
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        </section>
                    }
                    .into_any(),
                }}
                <Show when=move || selected.get().is_some()>
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h2>"Request Details"</h2>
                            {move || {
                                selected
                                    .get()
                                    .map(|r| {
                                        view! {
                                            <dl class="dialog__details">
                                                <dt>"Owner"</dt>
                                                <dd>{person_label(r.owner.as_ref())}</dd>
                                                <dt>"Product"</dt>
                                                <dd>{r.product.map(|p| p.name).unwrap_or_default()}</dd>
                                                <dt>"Message"</dt>
                                                <dd>{r.message}</dd>
                                                <dt>"Status"</dt>
                                                <dd>{r.status.as_str()}</dd>
                                            </dl>
                                        }
                                    })
                            }}
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| selected.set(None)>"Close"</button>
                                <button class="btn btn--danger" on:click=move |_| decide.run(RequestStatus::Rejected)>
                                    "Reject"
                                </button>
                                <button class="btn btn--primary" on:click=move |_| decide.run(RequestStatus::Accepted)>
                                    "Accept"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </MainLayout>
    }
}

fn request_row(feed: RequestFeed, request: ContactRequest, selected: RwSignal<Option<ContactRequest>>) -> impl IntoView {
    let counterpart = match feed {
        RequestFeed::Incoming => person_label(request.owner.as_ref()),
        RequestFeed::Sent => person_label(request.recipient.as_ref()),
    };
    let product = request.product.as_ref().map(|p| p.name.clone()).unwrap_or_default();
    let preview = truncate_message(&request.message, MESSAGE_PREVIEW_CHARS);
    let status = request.status;
    let date = request.created_at.clone().unwrap_or_default();
    let actionable = feed == RequestFeed::Incoming;

    view! {
        <tr>
            <td>{counterpart}</td>
            <td>{product}</td>
            <td>{preview}</td>
            <td>
                <span class=status_class(status)>{status.as_str()}</span>
            </td>
            <td>{date}</td>
            <td>
                {actionable
                    .then(|| {
                        view! {
                            <button class="btn" on:click=move |_| selected.set(Some(request.clone()))>
                                "View Details"
                            </button>
                        }
                    })}
            </td>
        </tr>
    }
}
