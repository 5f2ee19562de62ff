//! Session store: the single authority for the current bearer token and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads it before rendering a protected view and the request
//! layer reads it before every outbound call. Writes happen only from the
//! login/logout flows on the API client and from the 401 handler.
//!
//! INVARIANTS
//! ==========
//! - An absent or empty token means logged out, whatever role is stored.
//! - `set` writes the role before the token and `clear` removes the token
//!   before the role, so a reader never sees a fresh token paired with a
//!   missing role.
//! - Storage failures read as logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use crate::util::storage::KeyValueStore;

/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userType";
/// Both keys, for cross-tab change detection.
pub const SESSION_KEYS: &[&str] = &[TOKEN_KEY, ROLE_KEY];

/// Account type assigned at signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Investor,
    Landowner,
    Scout,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Investor, Role::Landowner, Role::Scout];

    /// Wire/storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Investor => "INVESTOR",
            Role::Landowner => "LANDOWNER",
            Role::Scout => "SCOUT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a role string outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-sensitive: `"Scout"` is not `SCOUT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INVESTOR" => Ok(Role::Investor),
            "LANDOWNER" => Ok(Role::Landowner),
            "SCOUT" => Ok(Role::Scout),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Snapshot of the persisted authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: Some(token.into()), role: Some(role) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Bearer token, if the session is authenticated.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Role, only while authenticated.
    #[must_use]
    pub fn effective_role(&self) -> Option<Role> {
        if self.is_authenticated() { self.role } else { None }
    }
}

/// Session persisted in a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current session. Unreadable storage yields the logged-out session, and
    /// an unrecognized role string reads as no role.
    pub fn get(&self) -> Session {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("session: token unreadable, treating as logged out: {e}");
                return Session::default();
            }
        };
        let role = match self.storage.get(ROLE_KEY) {
            Ok(Some(raw)) => raw
                .parse::<Role>()
                .map_err(|e| log::warn!("session: ignoring stored role: {e}"))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("session: role unreadable, treating as logged out: {e}");
                return Session::default();
            }
        };
        Session { token, role }
    }

    /// Persist `token` and `role` together. A failed write leaves the store
    /// cleared rather than half-written. An empty token is not a session, so
    /// setting one clears the store.
    pub fn set(&self, token: &str, role: Role) {
        if token.is_empty() {
            log::warn!("session: refusing empty token, clearing");
            self.clear();
            return;
        }
        let written = self
            .storage
            .set(ROLE_KEY, role.as_str())
            .and_then(|()| self.storage.set(TOKEN_KEY, token));
        if let Err(e) = written {
            log::warn!("session: write failed, clearing: {e}");
            self.clear();
        }
    }

    /// Remove both values. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, ROLE_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("session: failed to remove {key}: {e}");
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Reactive counter bumped after login, logout and cross-tab session edits.
/// Route guards track it so their decision is re-evaluated.
#[derive(Clone, Copy, Debug)]
pub struct SessionRevision(leptos::prelude::RwSignal<u64>);

impl SessionRevision {
    #[must_use]
    pub fn new() -> Self {
        Self(leptos::prelude::RwSignal::new(0))
    }

    pub fn bump(self) {
        use leptos::prelude::Update;
        self.0.update(|n| *n += 1);
    }

    /// Read the counter, subscribing the current reactive scope.
    pub fn track(self) -> u64 {
        use leptos::prelude::Get;
        self.0.get()
    }
}

impl Default for SessionRevision {
    fn default() -> Self {
        Self::new()
    }
}
