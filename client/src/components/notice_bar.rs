//! Stack of transient notices pinned to the top of the viewport.

use leptos::prelude::*;

use crate::state::notice::{NOTICE_TTL_MS, NoticeKind, NoticeState};

/// Push a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let mut id = 0;
    let text = text.into();
    notices.update(|n| id = n.push(kind, text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, NOTICE_TTL_MS);
    }
}

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-bar" role="status">
            <For
                each=move || notices.get().items
                key=|n| n.id
                let:notice
            >
                <div class=notice.kind.class()>
                    <span>{notice.text.clone()}</span>
                    <button
                        class="notice__close"
                        on:click=move |_| notices.update(|n| n.dismiss(notice.id))
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
