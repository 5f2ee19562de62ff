//! Role-gated routing: the static route table and the guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` evaluates [`check`] on every navigation. Missing token and
//! disallowed role both send the user to `/login`; the decision still carries
//! the reason so it can be logged.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::session::{Role, Session};

/// Redirect target for every denied navigation.
pub const LOGIN_PATH: &str = "/login";

const EVERY_ROLE: &[Role] = &[Role::Investor, Role::Landowner, Role::Scout];
const LANDOWNER_ONLY: &[Role] = &[Role::Landowner];

/// Screens of the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Signup,
    Dashboard,
    Marketplace,
    AddMarketplace,
    ProductDetails,
    Amenities,
    Profile,
    UpdateProfile,
}

/// Who may view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleGate {
    /// No session required.
    Public,
    /// Session required; an empty slice admits any role.
    Protected(&'static [Role]),
}

impl AppRoute {
    pub const ALL: [AppRoute; 9] = [
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Dashboard,
        AppRoute::Marketplace,
        AppRoute::AddMarketplace,
        AppRoute::ProductDetails,
        AppRoute::Amenities,
        AppRoute::Profile,
        AppRoute::UpdateProfile,
    ];

    /// Router path pattern.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => LOGIN_PATH,
            AppRoute::Signup => "/signup",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Marketplace => "/marketplace",
            AppRoute::AddMarketplace => "/addmarketplace",
            AppRoute::ProductDetails => "/product/:id",
            AppRoute::Amenities => "/amentics",
            AppRoute::Profile => "/profile",
            AppRoute::UpdateProfile => "/updateprofile",
        }
    }

    #[must_use]
    pub fn gate(self) -> RoleGate {
        match self {
            AppRoute::Login | AppRoute::Signup => RoleGate::Public,
            AppRoute::Amenities => RoleGate::Protected(LANDOWNER_ONLY),
            AppRoute::Dashboard
            | AppRoute::Marketplace
            | AppRoute::AddMarketplace
            | AppRoute::ProductDetails
            | AppRoute::Profile
            | AppRoute::UpdateProfile => RoleGate::Protected(EVERY_ROLE),
        }
    }

    /// Match a concrete location path (`/product/42`) to its route.
    #[must_use]
    pub fn from_location(path: &str) -> Option<AppRoute> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(AppRoute::Login);
        }
        if let Some(id) = trimmed.strip_prefix("/product/") {
            return (!id.is_empty() && !id.contains('/')).then_some(AppRoute::ProductDetails);
        }
        AppRoute::ALL
            .into_iter()
            .find(|route| *route != AppRoute::ProductDetails && route.path() == trimmed)
    }
}

/// Path of the details page for product `id`.
#[must_use]
pub fn product_path(id: i64) -> String {
    format!("/product/{id}")
}

/// Why a navigation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    Unauthorized { role: Option<Role> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: &'static str, reason: DenyReason },
}

/// Decide whether `session` may view a view gated by `allowed`.
#[must_use]
pub fn check(session: &Session, allowed: &[Role]) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::Redirect { to: LOGIN_PATH, reason: DenyReason::Unauthenticated };
    }
    if !allowed.is_empty() && !session.role.is_some_and(|r| allowed.contains(&r)) {
        return GuardDecision::Redirect {
            to: LOGIN_PATH,
            reason: DenyReason::Unauthorized { role: session.role },
        };
    }
    GuardDecision::Render
}

/// [`check`] against a route's configured gate. Public routes always render.
#[must_use]
pub fn check_route(session: &Session, route: AppRoute) -> GuardDecision {
    match route.gate() {
        RoleGate::Public => GuardDecision::Render,
        RoleGate::Protected(allowed) => check(session, allowed),
    }
}

/// Guard decision for the location the browser is actually at.
///
/// `pathname` wins over `mounted` when it names a known route, so a stale
/// mount (same component, new path) is still judged by the path being shown.
#[must_use]
pub fn check_location(session: &Session, pathname: &str, mounted: AppRoute) -> GuardDecision {
    check_route(session, AppRoute::from_location(pathname).unwrap_or(mounted))
}
