//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage, timed redirects, request sequencing and the pure route
//! guard live here, apart from page and component code.

pub mod expiry;
pub mod latest;
pub mod route_guard;
pub mod storage;
