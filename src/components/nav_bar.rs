//! Navigation bar shown above every protected screen.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::session::SessionState;

/// Protected destinations listed in the bar, with their labels.
pub(crate) const NAV_LINKS: [(AppRoute, &str); 4] = [
    (AppRoute::RoutineOverview, "My Routine"),
    (AppRoute::EditRoutine, "Edit Routine"),
    (AppRoute::Exercises, "Exercises"),
    (AppRoute::Account, "Account"),
];

pub(crate) fn greeting(state: &SessionState) -> Option<String> {
    state.session().map(|session| format!("Hi, {}", session.display_name()))
}

#[component]
pub fn NavBar(session: ReadSignal<SessionState>) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|(route, label)| view! { <A href=route.path()>{*label}</A> })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__links">{links}</div>
            <span class="nav-bar__greeting">{move || session.with(greeting)}</span>
            <A href=AppRoute::Logout.path()>"Log out"</A>
        </nav>
    }
}
