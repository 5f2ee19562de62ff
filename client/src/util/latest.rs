//! Latest-request-wins tagging for list/filter fetches.
//!
//! Concurrent fetches can resolve in any order. Each fetch takes a tag from
//! [`RequestSequencer::issue`] and applies its result only if
//! [`RequestSequencer::is_current`] still holds when it resolves.

#[cfg(test)]
#[path = "latest_test.rs"]
mod latest_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTag(u64);

/// Issues increasing tags. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request, superseding every earlier tag.
    pub fn issue(&self) -> RequestTag {
        RequestTag(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `tag` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, tag: RequestTag) -> bool {
        self.latest.load(Ordering::SeqCst) == tag.0
    }

    /// Run `apply` with `value` only when `tag` is current. Returns whether
    /// it ran.
    pub fn apply_if_current<T>(&self, tag: RequestTag, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current(tag) {
            apply(value);
            true
        } else {
            log::debug!("discarding stale response {tag:?}");
            false
        }
    }
}
