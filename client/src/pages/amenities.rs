//! Amenity catalogue management (landowner only).

#[cfg(test)]
#[path = "amenities_test.rs"]
mod amenities_test;

use leptos::prelude::*;

use crate::components::main_layout::MainLayout;
use crate::components::notice_bar::notify;
use crate::net::ConsoleClient;
use crate::net::types::Amenity;
use crate::state::notice::{NoticeKind, NoticeState};

/// Trimmed name, or the prompt to show when it is blank.
pub(crate) fn amenity_name(input: &str) -> Result<&str, &'static str> {
    let name = input.trim();
    if name.is_empty() { Err("Please enter the amenity name!") } else { Ok(name) }
}

/// Whether the catalogue already has `name`, ignoring case.
pub(crate) fn is_duplicate(existing: &[Amenity], name: &str) -> bool {
    existing.iter().any(|a| a.name.eq_ignore_ascii_case(name))
}

#[component]
pub fn AmenitiesPage() -> impl IntoView {
    let client = expect_context::<ConsoleClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let amenities = RwSignal::new(Vec::<Amenity>::new());
    let loading = RwSignal::new(true);
    let adding = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<i64>);

    let load = {
        let client = client.clone();
        Callback::new(move |()| {
            loading.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.list_amenities().await {
                    Ok(list) => amenities.set(list),
                    Err(e) => {
                        log::warn!("amenities: {e}");
                        notify(notices, NoticeKind::Error, "Failed to fetch amenities");
                    }
                }
                loading.set(false);
            });
        })
    };
    Effect::new(move || load.run(()));

    let on_add = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = new_name.get();
            let name = match amenity_name(&input) {
                Ok(name) => name.to_owned(),
                Err(msg) => {
                    notify(notices, NoticeKind::Error, msg);
                    return;
                }
            };
            if amenities.with(|list| is_duplicate(list, &name)) {
                notify(notices, NoticeKind::Info, format!("\"{name}\" is already listed."));
                return;
            }
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.add_amenity(&name).await {
                    Ok(()) => {
                        notify(notices, NoticeKind::Success, "Amenity added successfully!");
                        new_name.set(String::new());
                        adding.set(false);
                        load.run(());
                    }
                    Err(e) => {
                        log::warn!("amenities: add {name}: {e}");
                        notify(notices, NoticeKind::Error, "Failed to add amenity.");
                    }
                }
            });
        }
    };

    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.delete_amenity(id).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Amenity deleted successfully");
                    load.run(());
                }
                Err(e) => {
                    log::warn!("amenities: delete {id}: {e}");
                    notify(notices, NoticeKind::Error, "Failed to delete amenity");
                }
            }
        });
    };

    view! {
        <MainLayout title="Amenities">
            <section class="amenities">
                <div class="amenities__header">
                    <h2>"Amenities List"</h2>
                    <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                        "Add Amenity"
                    </button>
                </div>
                <Show when=move || loading.get()>
                    <div class="spinner">"Loading..."</div>
                </Show>
                <table class="amenities__table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Image"</th>
                            <th>"Amenity Name"</th>
                            <th>"Created At"</th>
                            <th>"Updated At"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || amenities.get() key=|a| a.id let:amenity>
                            <tr>
                                <td>{amenity.id}</td>
                                <td>
                                    {amenity
                                        .image_url
                                        .clone()
                                        .map(|src| view! { <img class="amenities__thumb" src=src alt="" /> })}
                                </td>
                                <td>{amenity.name.clone()}</td>
                                <td>{amenity.created_at.clone().unwrap_or_default()}</td>
                                <td>{amenity.updated_at.clone().unwrap_or_default()}</td>
                                <td>
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| pending_delete.set(Some(amenity.id))
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </section>
            <Show when=move || adding.get()>
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=on_add.clone()>
                        <h2>"Add New Amenity"</h2>
                        <label>
                            "Amenity Name"
                            <input
                                type="text"
                                prop:value=move || new_name.get()
                                on:input=move |ev| new_name.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| adding.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit">"Add"</button>
                        </div>
                    </form>
                </div>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <p>"Are you sure you want to delete this amenity?"</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| pending_delete.set(None)>"No"</button>
                            <button class="btn btn--danger" on:click=confirm_delete.clone()>"Yes"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </MainLayout>
    }
}
