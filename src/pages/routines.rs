//! Routine overview, the authenticated landing screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::session::SessionState;

#[component]
pub fn RoutineOverviewPage(session: ReadSignal<SessionState>) -> impl IntoView {
    let heading = move || {
        session.with(|s| match s.session() {
            Some(user) => format!("{}'s Routine", user.display_name()),
            None => "Your Routine".to_owned(),
        })
    };

    view! {
        <section class="routine">
            <h2>{heading}</h2>
            <p>"Your weekly routine appears here once exercises are added."</p>
            <A href=AppRoute::EditRoutine.path()>"Edit routine"</A>
        </section>
    }
}
