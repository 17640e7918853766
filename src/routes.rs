//! Route table and access decisions.
//!
//! ARCHITECTURE
//! ============
//! Every navigable path is listed once in [`ROUTES`] with its access class.
//! [`resolve`] is the pure decision the route gate runs whenever the path or
//! the session state changes, so the redirect rules are testable without a
//! browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::{Deserialize, Serialize};

use crate::session::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Screens reachable through the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    RoutineOverview,
    Account,
    EditRoutine,
    Exercises,
    Login,
    Logout,
    Signup,
}

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Requires an authenticated session.
    Protected,
    /// Open to anonymous visitors.
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: AppRoute,
    pub access: Access,
}

pub static ROUTES: [RouteEntry; 7] = [
    RouteEntry { path: "/", route: AppRoute::RoutineOverview, access: Access::Protected },
    RouteEntry { path: "/account", route: AppRoute::Account, access: Access::Protected },
    RouteEntry { path: "/edit-routine", route: AppRoute::EditRoutine, access: Access::Protected },
    RouteEntry { path: "/exercises", route: AppRoute::Exercises, access: Access::Protected },
    RouteEntry { path: "/login", route: AppRoute::Login, access: Access::Public },
    RouteEntry { path: "/logout", route: AppRoute::Logout, access: Access::Public },
    RouteEntry { path: "/signup", route: AppRoute::Signup, access: Access::Public },
];

impl AppRoute {
    fn entry(self) -> &'static RouteEntry {
        // ROUTES holds exactly one entry per variant, in declaration order.
        &ROUTES[self as usize]
    }

    pub fn path(self) -> &'static str {
        self.entry().path
    }

    /// Path without the leading slash, as the router's static segment.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn access(self) -> Access {
        self.entry().access
    }

    pub fn is_protected(self) -> bool {
        self.access() == Access::Protected
    }

    /// Look up the route for a URL path.
    ///
    /// Query strings, fragments, and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = normalize_path(path);
        ROUTES.iter().find(|entry| entry.path == normalized).map(|entry| entry.route)
    }
}

/// Tunable guard behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPolicy {
    /// Where to send an authenticated user who opens `/login`.
    /// `None` renders the login screen anyway.
    pub login_redirect_when_authenticated: Option<String>,
}

/// Outcome of resolving a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(AppRoute),
    Redirect(String),
    NotFound,
}

/// Decide whether `route` may render for `state`.
pub fn decide(route: AppRoute, state: &SessionState, policy: &GuardPolicy) -> Resolution {
    match (route.access(), state) {
        (Access::Protected, SessionState::Anonymous) => Resolution::Redirect(LOGIN_PATH.to_owned()),
        (Access::Public, SessionState::Authenticated(_)) if route == AppRoute::Login => {
            match &policy.login_redirect_when_authenticated {
                Some(target) if AppRoute::from_path(target) != Some(AppRoute::Login) => {
                    Resolution::Redirect(target.clone())
                }
                _ => Resolution::Render(route),
            }
        }
        _ => Resolution::Render(route),
    }
}

/// Resolve a raw URL path against the route table and the session state.
pub fn resolve(path: &str, state: &SessionState, policy: &GuardPolicy) -> Resolution {
    match AppRoute::from_path(path) {
        Some(route) => decide(route, state, policy),
        None => Resolution::NotFound,
    }
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
