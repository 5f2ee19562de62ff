//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (layout, notices) and the route guard
//! while reading shared state from Leptos context providers.

pub mod main_layout;
pub mod notice_bar;
pub mod protected_route;
