//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notice`) so components depend on
//! small focused models provided through Leptos context.

pub mod notice;
pub mod session;
