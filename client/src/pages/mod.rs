//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching and delegates chrome to
//! `components::main_layout`. Pure helpers (form mapping, filters, labels)
//! live beside each page and are unit tested there.

pub mod add_property;
pub mod amenities;
pub mod dashboard;
pub mod login;
pub mod marketplace;
pub mod product_details;
pub mod profile;
pub mod signup;
pub mod update_profile;
