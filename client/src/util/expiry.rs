//! Browser side of a forced logout: notice, then delayed navigation.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::notice_bar::notify;
use crate::net::http::{ExpiryAction, SessionExpiredHandler};
use crate::state::notice::{NoticeKind, NoticeState};

/// Shows the expiry notice and navigates to the login page after the
/// configured delay.
#[derive(Clone, Copy, Debug)]
pub struct ExpiryRedirect {
    notices: RwSignal<NoticeState>,
}

impl ExpiryRedirect {
    pub fn new(notices: RwSignal<NoticeState>) -> Arc<Self> {
        Arc::new(Self { notices })
    }
}

impl SessionExpiredHandler for ExpiryRedirect {
    fn session_expired(&self, action: &ExpiryAction) {
        notify(self.notices, NoticeKind::Error, action.notice);
        navigate_after(action.redirect_to, action.delay_ms);
    }
}

/// Full-page navigation to `path` after `delay_ms`. No-op off the browser.
pub fn navigate_after(path: &'static str, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, delay_ms);
    }
}
