//! Networking modules for the REST backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the session-aware request layer; `auth`, `products`,
//! `amenities` and `profile` add endpoint methods to [`http::ApiClient`];
//! `types` defines the wire schema.

pub mod amenities;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod products;
pub mod profile;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

/// Client type used by the running app.
pub type ConsoleClient = http::ApiClient<http::DefaultTransport, crate::util::storage::DefaultStorage>;
