//! Catch-all for paths missing from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found."</h2>
            <A href=HOME_PATH>"Back to your routine"</A>
        </section>
    }
}
