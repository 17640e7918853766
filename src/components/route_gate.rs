//! Access gate wrapped around every routed screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate recomputes the route decision whenever the session signal
//! changes, not only on mount. Logging out from a protected screen therefore
//! leaves it immediately, and a login that lands while `/login` is open
//! honors the configured redirect policy.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::routes::{AppRoute, GuardPolicy, Resolution, decide};
use crate::session::{SessionContext, SessionState};

/// Route decision that tracks the session signal.
pub(crate) fn gate_decision(
    route: AppRoute,
    state: ReadSignal<SessionState>,
    policy: GuardPolicy,
) -> Memo<Resolution> {
    Memo::new(move |_| state.with(|s| decide(route, s, &policy)))
}

/// Render `children` only while `route` is allowed for the current session;
/// otherwise navigate to the redirect target.
#[component]
pub fn RouteGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    let policy = expect_context::<AppConfig>().guard;
    let navigate = use_navigate();

    let decision = gate_decision(route, state, policy);

    Effect::new(move || {
        if let Resolution::Redirect(target) = decision.get() {
            log::debug!("{} not available, redirecting to {target}", route.path());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || matches!(decision.get(), Resolution::Render(_))>
            {children()}
        </Show>
    }
}

/// Protected screen chrome: the gate plus the logged-in navigation bar.
#[component]
pub fn LoggedIn(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state();
    view! {
        <RouteGate route=route>
            <NavBar session=state/>
            <main class="page">{children()}</main>
        </RouteGate>
    }
}
