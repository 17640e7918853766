//! Routine editor screen.

use leptos::prelude::*;

use crate::session::SessionState;

#[component]
pub fn EditRoutinePage(session: ReadSignal<SessionState>) -> impl IntoView {
    let owner = move || session.with(|s| s.session().map(|user| user.display_name().to_owned()));

    view! {
        <section class="routine-editor">
            <h2>"Edit Routine"</h2>
            <Show when=move || owner().is_some()>
                <p class="routine-editor__owner">"Editing for " {owner}</p>
            </Show>
            <p>"Add exercises, sets, reps and weights for each day of the week."</p>
        </section>
    }
}
