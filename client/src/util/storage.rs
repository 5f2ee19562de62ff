//! Key-value persistence behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; tests and the SSR build use
//! an in-memory map. Both sit behind [`KeyValueStore`] so session logic never
//! touches `web-sys` directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Failure reported by a storage backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, private mode, SSR).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the operation (quota, security error).
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an unset key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    broken: Arc<AtomicBool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail, simulating an unavailable
    /// `localStorage`.
    pub fn break_backend(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Operation(e.to_string()))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.lock()?.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call so the handle stays
/// `Send + Sync` for Leptos context.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Operation(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(|e| js_error(&e))
    }
}

/// Storage used by the running app: `localStorage` in the browser, an empty
/// in-memory map during SSR.
#[cfg(feature = "hydrate")]
pub type DefaultStorage = BrowserStorage;

/// Storage used by the running app: `localStorage` in the browser, an empty
/// in-memory map during SSR.
#[cfg(not(feature = "hydrate"))]
pub type DefaultStorage = MemoryStorage;

/// Invoke `on_change` whenever another tab modifies one of `keys`
/// (or clears storage entirely).
pub fn watch_external_changes<F>(keys: &'static [&'static str], on_change: F)
where
    F: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if is_relevant_change(ev.key().as_deref(), keys) {
                on_change();
            }
        });
        if window
            .add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            // Lives for the lifetime of the page.
            handler.forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (keys, on_change);
    }
}

/// A `storage` event with no key means `localStorage.clear()` ran elsewhere.
pub(crate) fn is_relevant_change(changed: Option<&str>, keys: &[&str]) -> bool {
    changed.is_none_or(|key| keys.contains(&key))
}
